//! Concrete rules engines.

pub mod snooker;

pub use snooker::{FrameBuilder, SnookerFrame};
