//! Core frame types: balls, players, configuration, state, events, RNG.
//!
//! These are the building blocks every rules component shares. Hosts
//! configure a frame via `FrameConfig` rather than changing the rules.

pub mod ball;
pub mod player;
pub mod rng;
pub mod config;
pub mod event;
pub mod state;

pub use ball::{Ball, BallId, BallKind, Colour};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{Breaker, FrameConfig};
pub use event::{CollisionEvent, TableCommand, TableEvent};
pub use state::{FramePhase, FrameSnapshot, MatchState};
