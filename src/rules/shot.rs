//! Per-shot scratch record.
//!
//! A `ShotContext` is opened when the cue is released and accumulates what
//! happened until the table settles: the first ball the cue ball touched,
//! every ball that dropped, and at most one foul.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ball_on::BallOn;
use crate::core::ball::{Ball, BallId, BallKind, Colour};
use crate::core::player::PlayerId;

/// Minimum award for any foul.
pub const FOUL_MINIMUM: u32 = 4;

/// Apply the foul floor to a ball value.
#[must_use]
pub fn foul_value(value: u32) -> u32 {
    value.max(FOUL_MINIMUM)
}

/// Why a shot was a foul.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoulReason {
    /// The cue ball touched nothing.
    NoContact,
    /// The cue ball hit a ball that was not on.
    WrongBallFirst { hit: BallKind, on: BallOn },
    /// Two or more colours dropped in one shot.
    MultipleColoursPotted,
    /// A colour dropped while a red was on.
    ColourPottedOnRed(Colour),
    /// A ball other than the one on dropped.
    WrongBallPotted(BallKind),
    /// In-off.
    CueBallPotted,
}

impl std::fmt::Display for FoulReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoulReason::NoContact => f.write_str("no contact"),
            FoulReason::WrongBallFirst { hit, on } => {
                write!(f, "hit {} first with {} on", hit, on)
            }
            FoulReason::MultipleColoursPotted => f.write_str("more than one colour potted"),
            FoulReason::ColourPottedOnRed(colour) => write!(f, "{} potted with red on", colour),
            FoulReason::WrongBallPotted(kind) => write!(f, "{} potted when not on", kind),
            FoulReason::CueBallPotted => f.write_str("cue ball potted"),
        }
    }
}

/// A committed foul.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foul {
    pub points: u32,
    pub reason: FoulReason,
}

/// Everything recorded about the shot in progress.
#[derive(Clone, Debug)]
pub struct ShotContext {
    player: PlayerId,
    cue_ball: BallId,
    first_contact: Option<Ball>,
    potted: SmallVec<[Ball; 4]>,
    foul: Option<Foul>,
}

impl ShotContext {
    /// Open a context for `player` striking the cue ball `cue_ball`.
    #[must_use]
    pub fn new(player: PlayerId, cue_ball: BallId) -> Self {
        Self {
            player,
            cue_ball,
            first_contact: None,
            potted: SmallVec::new(),
            foul: None,
        }
    }

    /// The striker.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn cue_ball(&self) -> BallId {
        self.cue_ball
    }

    #[must_use]
    pub fn first_contact(&self) -> Option<&Ball> {
        self.first_contact.as_ref()
    }

    /// Record a ball touched by the cue ball. Only the first one counts.
    ///
    /// Returns true if this became the first contact.
    pub fn record_contact(&mut self, ball: Ball) -> bool {
        if self.first_contact.is_some() {
            return false;
        }
        self.first_contact = Some(ball);
        true
    }

    /// Record a ball that dropped.
    pub fn record_pot(&mut self, ball: Ball) {
        self.potted.push(ball);
    }

    #[must_use]
    pub fn potted(&self) -> &[Ball] {
        &self.potted
    }

    #[must_use]
    pub fn cue_potted(&self) -> bool {
        self.potted.iter().any(Ball::is_cue)
    }

    #[must_use]
    pub fn reds_potted(&self) -> usize {
        self.potted.iter().filter(|ball| ball.is_red()).count()
    }

    /// Colours that dropped, in pot order.
    pub fn colours_potted(&self) -> impl Iterator<Item = Colour> + '_ {
        self.potted.iter().filter_map(Ball::colour)
    }

    /// Total value of the object balls potted.
    #[must_use]
    pub fn pot_value(&self) -> u32 {
        self.potted.iter().map(Ball::value).sum()
    }

    /// Commit a foul. Only the first foul of a shot sticks.
    ///
    /// Returns true if this call recorded the foul.
    pub fn commit_foul(&mut self, points: u32, reason: FoulReason) -> bool {
        if self.foul.is_some() {
            return false;
        }
        self.foul = Some(Foul { points, reason });
        true
    }

    #[must_use]
    pub fn foul(&self) -> Option<Foul> {
        self.foul
    }

    #[must_use]
    pub fn foul_committed(&self) -> bool {
        self.foul.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ctx() -> ShotContext {
        ShotContext::new(PlayerId::ONE, BallId(0))
    }

    fn ball(id: u32, kind: BallKind) -> Ball {
        Ball::new(BallId(id), kind, Vec2::ZERO)
    }

    #[test]
    fn test_first_contact_sticks() {
        let mut ctx = ctx();
        assert!(ctx.record_contact(ball(1, BallKind::Red)));
        assert!(!ctx.record_contact(ball(2, BallKind::Colour(Colour::Black))));
        assert_eq!(ctx.first_contact().map(|b| b.id), Some(BallId(1)));
    }

    #[test]
    fn test_first_foul_sticks() {
        let mut ctx = ctx();
        assert!(ctx.commit_foul(4, FoulReason::NoContact));
        assert!(!ctx.commit_foul(7, FoulReason::CueBallPotted));
        assert_eq!(
            ctx.foul(),
            Some(Foul {
                points: 4,
                reason: FoulReason::NoContact
            })
        );
    }

    #[test]
    fn test_pot_queries() {
        let mut ctx = ctx();
        ctx.record_pot(ball(1, BallKind::Red));
        ctx.record_pot(ball(2, BallKind::Red));
        ctx.record_pot(ball(3, BallKind::Colour(Colour::Pink)));
        ctx.record_pot(ball(0, BallKind::Cue));

        assert_eq!(ctx.reds_potted(), 2);
        assert_eq!(ctx.colours_potted().collect::<Vec<_>>(), vec![Colour::Pink]);
        assert_eq!(ctx.pot_value(), 8);
        assert!(ctx.cue_potted());
    }

    #[test]
    fn test_foul_value_floor() {
        assert_eq!(foul_value(0), 4);
        assert_eq!(foul_value(2), 4);
        assert_eq!(foul_value(7), 7);
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(FoulReason::NoContact.to_string(), "no contact");
        assert_eq!(
            FoulReason::ColourPottedOnRed(Colour::Blue).to_string(),
            "blue potted with red on"
        );
    }
}
