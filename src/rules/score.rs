//! Scores, breaks and the pot/foul histories of a frame.
//!
//! ## Rules
//!
//! - Pots score for the striker only when the shot carried no foul.
//! - Foul points always go to the opponent of the player who fouled.
//! - The break is the running total of one visit and closes whenever the
//!   turn passes.
//!
//! Histories use `im::Vector`, so cloning a ledger for a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::shot::{FoulReason, ShotContext};
use crate::core::ball::BallKind;
use crate::core::player::{PlayerId, PlayerMap};

/// A foul award.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoulRecord {
    pub shot: u32,
    pub fouling_player: PlayerId,
    pub awarded_to: PlayerId,
    pub points: u32,
    pub reason: FoulReason,
}

impl std::fmt::Display for FoulRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Foul by {}: {} ({} to {})",
            self.fouling_player, self.reason, self.points, self.awarded_to
        )
    }
}

/// A ball that scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotRecord {
    pub shot: u32,
    pub player: PlayerId,
    pub ball: BallKind,
    pub points: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    scores: PlayerMap<u32>,
    foul_history: Vector<FoulRecord>,
    pot_history: Vector<PotRecord>,
    current_break: u32,
    highest_break: PlayerMap<u32>,
}

impl ScoreLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score the balls potted in `ctx` for its striker.
    ///
    /// A fouled shot scores nothing, whatever went down. Returns the points
    /// awarded.
    pub fn process_turn(&mut self, ctx: &ShotContext, shot: u32) -> u32 {
        if ctx.foul_committed() {
            return 0;
        }

        let player = ctx.player();
        let mut total = 0;
        for ball in ctx.potted().iter().filter(|ball| !ball.is_cue()) {
            let points = ball.value();
            self.pot_history.push_back(PotRecord {
                shot,
                player,
                ball: ball.kind,
                points,
            });
            total += points;
        }

        self.add_points(player, total);
        total
    }

    /// Add points to a player and to the running break.
    pub fn add_points(&mut self, player: PlayerId, points: u32) {
        self.scores[player] += points;
        self.current_break += points;
    }

    /// Award a foul to the opponent of `fouling_player`.
    pub fn add_foul(
        &mut self,
        fouling_player: PlayerId,
        points: u32,
        reason: FoulReason,
        shot: u32,
    ) {
        let awarded_to = fouling_player.opponent();
        self.scores[awarded_to] += points;
        self.foul_history.push_back(FoulRecord {
            shot,
            fouling_player,
            awarded_to,
            points,
            reason,
        });
    }

    /// Close `player`'s break when the turn passes.
    ///
    /// Returns the finished break.
    pub fn end_break(&mut self, player: PlayerId) -> u32 {
        let finished = std::mem::take(&mut self.current_break);
        let best = &mut self.highest_break[player];
        *best = (*best).max(finished);
        finished
    }

    /// Clear everything for a new frame.
    pub fn reset(&mut self) {
        self.scores.clear();
        self.highest_break.clear();
        self.foul_history.clear();
        self.pot_history.clear();
        self.current_break = 0;
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Absolute difference between the two scores.
    #[must_use]
    pub fn lead(&self) -> u32 {
        self.scores[PlayerId::ONE].abs_diff(self.scores[PlayerId::TWO])
    }

    #[must_use]
    pub fn current_break(&self) -> u32 {
        self.current_break
    }

    /// Best completed break.
    #[must_use]
    pub fn highest_break(&self, player: PlayerId) -> u32 {
        self.highest_break[player]
    }

    #[must_use]
    pub fn foul_history(&self) -> &Vector<FoulRecord> {
        &self.foul_history
    }

    #[must_use]
    pub fn pot_history(&self) -> &Vector<PotRecord> {
        &self.pot_history
    }

    /// The most recent foul, for display.
    #[must_use]
    pub fn last_foul(&self) -> Option<&FoulRecord> {
        self.foul_history.last()
    }
}
