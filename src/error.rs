//! Errors returned to the host.
//!
//! Fouls are not errors: they are part of the game and recorded in the
//! ledger. A `RulesError` means the host called the engine out of order or
//! handed it a configuration or layout no frame can start from.

use thiserror::Error;

use crate::core::ball::BallId;
use crate::core::state::FramePhase;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("cannot {action} while {phase}")]
    InvalidPhase {
        action: &'static str,
        phase: FramePhase,
    },

    #[error("the frame is over")]
    FrameOver,

    #[error("no cue ball on the table")]
    CueBallMissing,

    #[error("unknown ball {0}")]
    UnknownBall(BallId),

    #[error("no shot in progress")]
    NoShotInProgress,

    #[error("player id {0} is not 0 or 1")]
    InvalidPlayer(u8),

    #[error("cannot rack {0} reds, a rack holds 1 to 15")]
    InvalidReds(u8),

    #[error("layout has {0} reds, at most 15 may be on the table")]
    TooManyReds(usize),

    #[error("layout has {0} cue balls")]
    MultipleCueBalls(usize),
}

pub type Result<T> = std::result::Result<T, RulesError>;
