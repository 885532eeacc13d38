//! The table as the rules engine sees it.
//!
//! Positions and motion belong to the physics host. This module holds the
//! engine's view of them:
//!
//! - `TableGeometry`: playing area, D, spots, pockets and the opening rack
//! - `BallRegistry`: balls currently on the table
//! - `balls_stationary`: the settled-table predicate the host polls

pub mod geometry;
pub mod physics;
pub mod registry;

pub use geometry::{TableGeometry, FULL_RACK};
pub use physics::{balls_stationary, STATIONARY_THRESHOLD};
pub use registry::BallRegistry;
