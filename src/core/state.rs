//! Frame state.
//!
//! ## MatchState
//!
//! Everything the rules engine knows about the frame in progress:
//! - phase, striker, breaker
//! - ball on and any nominated colour
//! - the balls on the table
//! - the score ledger and endgame sequencer
//! - commands queued for the physics host
//!
//! There is no ambient table or world: the engine receives a `MatchState`
//! by reference on every call.
//!
//! ## FrameSnapshot
//!
//! A serialisable summary for a UI layer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallId, BallKind, Colour};
use super::event::TableCommand;
use super::player::{PlayerId, PlayerMap};
use crate::error::{Result, RulesError};
use crate::rules::ball_on::BallOn;
use crate::rules::endgame::EndgameSequencer;
use crate::rules::score::{FoulRecord, ScoreLedger};
use crate::rules::shot::ShotContext;
use crate::table::geometry::FULL_RACK;
use crate::table::registry::BallRegistry;

/// Where the frame is in the shot lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FramePhase {
    /// Waiting for the striker to play.
    #[default]
    AwaitingShot,
    /// Balls are rolling; table events are being collected.
    BallsMoving,
    /// The table has settled and the shot is being judged.
    HandlingTurnEnd,
    /// The striker must choose a colour after potting a red.
    AwaitingNomination,
    /// The incoming player must place the cue ball in the D.
    BallInHand,
    /// The frame is decided.
    GameOver,
}

impl std::fmt::Display for FramePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FramePhase::AwaitingShot => "awaiting shot",
            FramePhase::BallsMoving => "balls moving",
            FramePhase::HandlingTurnEnd => "handling turn end",
            FramePhase::AwaitingNomination => "awaiting nomination",
            FramePhase::BallInHand => "ball in hand",
            FramePhase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// The frame in progress.
#[derive(Clone, Debug, Default)]
pub struct MatchState {
    pub phase: FramePhase,

    /// Player at the table.
    pub current_player: PlayerId,

    /// Player who broke this frame.
    pub breaker: PlayerId,

    pub ball_on: BallOn,

    /// Colour declared after a red, while `ball_on` is `Colour`.
    pub nominated: Option<Colour>,

    pub registry: BallRegistry,

    pub ledger: ScoreLedger,

    pub endgame: EndgameSequencer,

    /// Shots played this frame (starts at 0, incremented on release).
    pub shot_number: u32,

    /// The shot being played, between release and settle.
    pub(crate) shot: Option<ShotContext>,

    commands: Vec<TableCommand>,

    next_ball_id: u32,
}

impl MatchState {
    /// An empty table with `breaker` to play.
    #[must_use]
    pub fn new(breaker: PlayerId) -> Self {
        Self {
            current_player: breaker,
            breaker,
            ..Self::default()
        }
    }

    /// Build a state from an explicit layout.
    ///
    /// Balls get ids in layout order. No spawn commands are queued: the
    /// host is expected to build its world from the same layout. A layout
    /// may hold at most one cue ball and at most 15 reds.
    pub fn with_layout(breaker: PlayerId, layout: &[(BallKind, Vec2)]) -> Result<Self> {
        let cues = layout.iter().filter(|(kind, _)| *kind == BallKind::Cue).count();
        if cues > 1 {
            return Err(RulesError::MultipleCueBalls(cues));
        }
        let reds = layout.iter().filter(|(kind, _)| *kind == BallKind::Red).count();
        if reds > usize::from(FULL_RACK) {
            return Err(RulesError::TooManyReds(reds));
        }

        let mut state = Self::new(breaker);
        for &(kind, position) in layout {
            let id = state.alloc_ball_id();
            state.registry.insert(Ball::new(id, kind, position));
        }
        Ok(state)
    }

    /// Allocate a fresh ball id.
    pub fn alloc_ball_id(&mut self) -> BallId {
        let id = BallId(self.next_ball_id);
        self.next_ball_id += 1;
        id
    }

    /// Put a new ball on the table and tell the host to create it.
    pub fn spawn_ball(&mut self, kind: BallKind, position: Vec2) -> Ball {
        let ball = Ball::new(self.alloc_ball_id(), kind, position);
        self.registry.insert(ball);
        self.commands.push(TableCommand::Spawn(ball));
        ball
    }

    /// Queue a command for the host.
    pub fn push_command(&mut self, command: TableCommand) {
        self.commands.push(command);
    }

    /// Take every queued command.
    pub fn drain_commands(&mut self) -> Vec<TableCommand> {
        std::mem::take(&mut self.commands)
    }

    #[must_use]
    pub fn pending_commands(&self) -> &[TableCommand] {
        &self.commands
    }

    // === Read accessors ===

    /// The shot in progress, while balls are moving.
    #[must_use]
    pub fn shot(&self) -> Option<&ShotContext> {
        self.shot.as_ref()
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.ledger.score(player)
    }

    #[must_use]
    pub fn ball_on(&self) -> BallOn {
        self.ball_on
    }

    #[must_use]
    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == FramePhase::GameOver
    }

    /// Summary for display.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            current_player: self.current_player,
            scores: self.ledger.scores().clone(),
            ball_on: self.ball_on,
            nominated: self.nominated,
            current_break: self.ledger.current_break(),
            reds_remaining: self.registry.reds_remaining(),
            colours_on_table: self.registry.colours_on_table(),
            endgame_active: self.endgame.is_active(),
            last_foul: self.ledger.last_foul().copied(),
            shot_number: self.shot_number,
        }
    }
}

/// What a scoreboard needs to draw the frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: FramePhase,
    pub current_player: PlayerId,
    pub scores: PlayerMap<u32>,
    pub ball_on: BallOn,
    pub nominated: Option<Colour>,
    pub current_break: u32,
    pub reds_remaining: usize,
    pub colours_on_table: Vec<Colour>,
    pub endgame_active: bool,
    pub last_foul: Option<FoulRecord>,
    pub shot_number: u32,
}
