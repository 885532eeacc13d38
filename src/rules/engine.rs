//! Rules engine trait for frame implementations.
//!
//! A rules engine drives one frame through the shot lifecycle:
//! - a shot is released
//! - table events arrive while balls move
//! - the table settles and the shot is judged
//! - the next player nominates or places the cue ball as required
//!
//! The engine holds configuration only. All frame data lives in
//! `MatchState`, passed by reference on every call, so a host can clone,
//! snapshot or replace it freely.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shot::Foul;
use crate::core::ball::{BallId, Colour};
use crate::core::config::FrameConfig;
use crate::core::event::{CollisionEvent, TableEvent};
use crate::core::player::PlayerId;
use crate::core::state::{FramePhase, MatchState};
use crate::error::Result;

/// Result of a completed frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Level scores when the frame ended.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

/// What happened when a shot was judged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    /// Shot number within the frame.
    pub shot: u32,
    /// The striker.
    pub player: PlayerId,
    pub foul: Option<Foul>,
    /// Points the striker scored from pots (0 on a foul).
    pub points_scored: u32,
    pub legal_pot: bool,
    /// Colours put back on the table.
    pub respotted: Vec<Colour>,
    pub next_player: PlayerId,
    pub phase: FramePhase,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `on_event`: ignore events outside `BallsMoving` rather than failing
/// - `on_balls_stationary`: must leave the state in a phase that waits on
///   the host (`AwaitingShot`, `AwaitingNomination`, `BallInHand` or
///   `GameOver`)
/// - `is_terminal`: return None while the frame continues
pub trait RulesEngine {
    /// Get the frame configuration.
    fn config(&self) -> &FrameConfig;

    /// The striker has played; start collecting table events.
    fn on_shot_released(&mut self, state: &mut MatchState) -> Result<()>;

    /// Record something the host observed while balls were moving.
    fn on_event(&mut self, state: &mut MatchState, event: TableEvent) -> Result<()>;

    /// The table has settled: judge the shot and set up the next one.
    fn on_balls_stationary(&mut self, state: &mut MatchState) -> Result<TurnSummary>;

    /// Declare the colour on after a red.
    fn nominate_colour(&mut self, state: &mut MatchState, colour: Colour) -> Result<()>;

    /// Place the cue ball in hand.
    ///
    /// Returns `Ok(false)` and leaves the state alone if `position` is not
    /// a legal placement.
    fn place_cue_ball(&mut self, state: &mut MatchState, position: Vec2) -> Result<bool>;

    /// Check if the frame is over.
    ///
    /// Returns `Some(result)` if the frame has ended, `None` if it continues.
    fn is_terminal(&self, state: &MatchState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Report a collision between two balls.
    fn on_collision(&mut self, state: &mut MatchState, collision: CollisionEvent) -> Result<()> {
        self.on_event(state, TableEvent::Collision(collision))
    }

    /// Report a ball dropping into a pocket.
    fn on_ball_potted(&mut self, state: &mut MatchState, ball: BallId) -> Result<()> {
        self.on_event(state, TableEvent::Potted(ball))
    }

    /// Report a batch of events in order, stopping at the first error.
    fn on_events<I>(&mut self, state: &mut MatchState, events: I) -> Result<()>
    where
        I: IntoIterator<Item = TableEvent>,
        Self: Sized,
    {
        events
            .into_iter()
            .try_for_each(|event| self.on_event(state, event))
    }
}
