//! Legality of the balls potted in a shot.
//!
//! Judging is split in two. [`PotLegality::judge`] looks only at what went
//! down and returns a [`PotVerdict`]. [`PotLegality::evaluate`] commits any
//! foul to the shot context, adds the in-off check, and only when the shot
//! stayed clean moves the ball on (and the endgame sequence) forward.

use log::debug;

use super::ball_on::BallOn;
use super::shot::{foul_value, FoulReason, ShotContext, FOUL_MINIMUM};
use crate::core::ball::{BallKind, Colour};
use crate::core::state::MatchState;

/// What the potted balls amount to on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PotVerdict {
    /// Nothing (other than possibly the cue ball) went down.
    NoPot,
    /// Only balls that were on went down.
    Legal,
    Foul { points: u32, reason: FoulReason },
}

/// Result of evaluating a settled shot's pots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PotOutcome {
    /// A legal pot was made and the striker stays at the table.
    pub legal: bool,
    /// A red went down legally; the striker must nominate a colour.
    pub nomination_required: bool,
    /// The last colour of the sequence went down legally.
    pub frame_complete: bool,
}

pub struct PotLegality;

impl PotLegality {
    /// Judge the potted object balls against the ball on.
    #[must_use]
    pub fn judge(ctx: &ShotContext, ball_on: BallOn, nominated: Option<Colour>) -> PotVerdict {
        let colours: Vec<Colour> = ctx.colours_potted().collect();
        let reds = ctx.reds_potted();

        if colours.len() > 1 {
            let highest = colours.iter().map(|c| c.value()).max().unwrap_or_default();
            return PotVerdict::Foul {
                points: foul_value(highest),
                reason: FoulReason::MultipleColoursPotted,
            };
        }

        let colour = colours.first().copied();
        match ball_on {
            BallOn::Red => match (colour, reds) {
                (Some(colour), _) => PotVerdict::Foul {
                    points: foul_value(colour.value()),
                    reason: FoulReason::ColourPottedOnRed(colour),
                },
                (None, 0) => PotVerdict::NoPot,
                (None, _) => PotVerdict::Legal,
            },
            BallOn::Colour => match (colour, reds) {
                (_, reds) if reds > 0 => PotVerdict::Foul {
                    points: FOUL_MINIMUM,
                    reason: FoulReason::WrongBallPotted(BallKind::Red),
                },
                (None, _) => PotVerdict::NoPot,
                (Some(colour), _) if ball_on.admits(BallKind::Colour(colour), nominated) => {
                    PotVerdict::Legal
                }
                (Some(colour), _) => PotVerdict::Foul {
                    points: FOUL_MINIMUM,
                    reason: FoulReason::WrongBallPotted(BallKind::Colour(colour)),
                },
            },
            BallOn::Sequence(required) => {
                let wrong = ctx
                    .potted()
                    .iter()
                    .filter(|ball| !ball.is_cue())
                    .find(|ball| ball.kind != BallKind::Colour(required));
                match (wrong, colour) {
                    (Some(ball), _) => PotVerdict::Foul {
                        points: foul_value(ball.value().max(required.value())),
                        reason: FoulReason::WrongBallPotted(ball.kind),
                    },
                    (None, Some(_)) => PotVerdict::Legal,
                    (None, None) => PotVerdict::NoPot,
                }
            }
        }
    }

    /// Evaluate the shot's pots, committing fouls and advancing the ball on.
    ///
    /// Fouls are committed in order: the pot verdict, then an in-off. A foul
    /// already in `ctx` (from the first contact) takes precedence over both.
    /// The ball on only changes when the whole shot is clean.
    pub fn evaluate(ctx: &mut ShotContext, state: &mut MatchState) -> PotOutcome {
        let verdict = Self::judge(ctx, state.ball_on, state.nominated);

        if let PotVerdict::Foul { points, reason } = verdict {
            if ctx.commit_foul(points, reason) {
                debug!("{} fouled: {} ({} points)", ctx.player(), reason, points);
            }
        }

        if ctx.cue_potted() {
            let points = foul_value(state.ball_on.value(state.nominated));
            if ctx.commit_foul(points, FoulReason::CueBallPotted) {
                debug!("{} fouled: in-off ({} points)", ctx.player(), points);
            }
        }

        if verdict != PotVerdict::Legal || ctx.foul_committed() {
            return PotOutcome::default();
        }

        let mut outcome = PotOutcome {
            legal: true,
            ..PotOutcome::default()
        };

        match state.ball_on {
            BallOn::Red => {
                state.ball_on = BallOn::Colour;
                state.nominated = None;
                outcome.nomination_required = true;
            }
            BallOn::Colour => {
                state.ball_on = BallOn::Red;
                state.nominated = None;
            }
            BallOn::Sequence(potted) => match state.endgame.advance() {
                Some(next) => {
                    debug!("{} potted in sequence, {} now on", potted, next);
                    state.ball_on = BallOn::Sequence(next);
                }
                None => outcome.frame_complete = true,
            },
        }
        outcome
    }
}
