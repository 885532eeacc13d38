//! Snooker rules.
//!
//! `RulesEngine` is the interface a frame implementation offers the host.
//! The components below it each judge one part of a shot and are driven in
//! order when the table settles:
//!
//! 1. `FoulDetector`: first contact
//! 2. `PotLegality`: what went down, and the next ball on
//! 3. `ScoreLedger`: points, fouls and breaks
//! 4. `RespotManager`: colours back on their spots, cue ball in hand
//! 5. `EndgameSequencer`: the colours in order once the reds are gone
//! 6. `frame_end`: whether the frame is decided

pub mod ball_on;
pub mod endgame;
pub mod engine;
pub mod foul;
pub mod frame_end;
pub mod pot;
pub mod respot;
pub mod score;
pub mod shot;

pub use ball_on::BallOn;
pub use endgame::{EndgameSequencer, COLOUR_SEQUENCE};
pub use engine::{GameResult, RulesEngine, TurnSummary};
pub use foul::FoulDetector;
pub use frame_end::{frame_decided, points_remaining_on_table};
pub use pot::{PotLegality, PotOutcome, PotVerdict};
pub use respot::{RespotManager, RESPOT_PRIORITY};
pub use score::{FoulRecord, PotRecord, ScoreLedger};
pub use shot::{foul_value, Foul, FoulReason, ShotContext, FOUL_MINIMUM};
