//! # snooker-rules
//!
//! A turn and scoring rules engine for snooker frames.
//!
//! The engine does not simulate physics. A host runs the table simulation
//! and reports what happened; the engine decides what it means.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The engine never advances time. The host calls
//!    `on_shot_released`, reports collisions and pots, and calls
//!    `on_balls_stationary` once `balls_stationary` holds.
//!
//! 2. **State Passed In**: `SnookerFrame` holds configuration only. All frame
//!    data lives in `MatchState`, which every call takes by reference.
//!
//! 3. **Fouls Are Data**: A foul is recorded in the ledger and returned in
//!    the `TurnSummary`. `RulesError` is reserved for calls made out of order.
//!
//! ## Shot Lifecycle
//!
//! ```text
//! AwaitingShot -> BallsMoving -> HandlingTurnEnd -> AwaitingShot
//!                                                 | AwaitingNomination
//!                                                 | BallInHand
//!                                                 | GameOver
//! ```
//!
//! ## Example
//!
//! ```
//! use snooker_rules::{Breaker, CollisionEvent, FrameBuilder, FramePhase, PlayerId, RulesEngine};
//!
//! let (mut frame, mut state) = FrameBuilder::new()
//!     .breaker(Breaker::Player(PlayerId::ONE))
//!     .build()
//!     .unwrap();
//!
//! let cue = state.registry.cue_ball().unwrap().id;
//! let red = state.registry.iter().find(|b| b.is_red()).unwrap().id;
//!
//! frame.on_shot_released(&mut state).unwrap();
//! frame.on_collision(&mut state, CollisionEvent::new(cue, red)).unwrap();
//! frame.on_ball_potted(&mut state, red).unwrap();
//! let summary = frame.on_balls_stationary(&mut state).unwrap();
//!
//! assert_eq!(summary.points_scored, 1);
//! assert_eq!(state.phase(), FramePhase::AwaitingNomination);
//! ```
//!
//! ## Modules
//!
//! - `core`: Ball ids, players, configuration, state, events, RNG
//! - `table`: Geometry, ball registry, stationary predicate
//! - `rules`: RulesEngine trait and the rule components
//! - `games`: The snooker frame engine
//! - `error`: Errors returned to the host

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    Ball, BallId, BallKind, Colour,
    PlayerId, PlayerMap,
    GameRng,
    Breaker, FrameConfig,
    CollisionEvent, TableCommand, TableEvent,
    FramePhase, FrameSnapshot, MatchState,
};

pub use crate::table::{balls_stationary, BallRegistry, TableGeometry};

pub use crate::rules::{
    BallOn, Foul, FoulReason, FoulRecord, PotRecord, ScoreLedger,
    GameResult, RulesEngine, TurnSummary,
};

pub use crate::games::{FrameBuilder, SnookerFrame};

pub use crate::error::{Result, RulesError};
