//! First-contact fouls.

use log::debug;

use super::ball_on::BallOn;
use super::shot::{foul_value, FoulReason, ShotContext, FOUL_MINIMUM};
use crate::core::ball::Colour;

/// Judges the first ball the cue ball struck.
pub struct FoulDetector;

impl FoulDetector {
    /// Check the first contact against the ball on.
    ///
    /// - nothing hit: 4 points
    /// - wrong ball hit: the higher of 4 and the value of the ball hit
    ///
    /// During the endgame `ball_on` is `Sequence(_)` and names the required
    /// colour. Returns true if this call committed a foul; a foul already
    /// recorded in `ctx` is left in place.
    pub fn evaluate(ctx: &mut ShotContext, ball_on: BallOn, nominated: Option<Colour>) -> bool {
        let (points, reason) = match ctx.first_contact() {
            None => (FOUL_MINIMUM, FoulReason::NoContact),
            Some(ball) if ball_on.admits(ball.kind, nominated) => return false,
            Some(ball) => (
                foul_value(ball.value()),
                FoulReason::WrongBallFirst {
                    hit: ball.kind,
                    on: ball_on,
                },
            ),
        };

        let committed = ctx.commit_foul(points, reason);
        if committed {
            debug!("{} fouled: {} ({} points)", ctx.player(), reason, points);
        }
        committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ball::{Ball, BallId, BallKind};
    use crate::core::player::PlayerId;
    use glam::Vec2;

    fn ctx_hitting(kind: Option<BallKind>) -> ShotContext {
        let mut ctx = ShotContext::new(PlayerId::ONE, BallId(0));
        if let Some(kind) = kind {
            ctx.record_contact(Ball::new(BallId(1), kind, Vec2::ZERO));
        }
        ctx
    }

    #[test]
    fn test_no_contact_is_four() {
        let mut ctx = ctx_hitting(None);
        assert!(FoulDetector::evaluate(&mut ctx, BallOn::Red, None));
        let foul = ctx.foul().unwrap();
        assert_eq!(foul.points, 4);
        assert_eq!(foul.reason, FoulReason::NoContact);
    }

    #[test]
    fn test_correct_ball_is_clean() {
        let mut ctx = ctx_hitting(Some(BallKind::Red));
        assert!(!FoulDetector::evaluate(&mut ctx, BallOn::Red, None));
        assert!(!ctx.foul_committed());
    }

    #[test]
    fn test_wrong_ball_uses_higher_value() {
        let mut ctx = ctx_hitting(Some(BallKind::Colour(Colour::Black)));
        FoulDetector::evaluate(&mut ctx, BallOn::Red, None);
        assert_eq!(ctx.foul().unwrap().points, 7);

        let mut ctx = ctx_hitting(Some(BallKind::Colour(Colour::Yellow)));
        FoulDetector::evaluate(&mut ctx, BallOn::Red, None);
        assert_eq!(ctx.foul().unwrap().points, 4);
    }

    #[test]
    fn test_red_hit_with_colour_on() {
        let mut ctx = ctx_hitting(Some(BallKind::Red));
        FoulDetector::evaluate(&mut ctx, BallOn::Colour, Some(Colour::Blue));
        assert_eq!(ctx.foul().unwrap().points, 4);
    }

    #[test]
    fn test_non_nominated_colour() {
        let mut ctx = ctx_hitting(Some(BallKind::Colour(Colour::Pink)));
        FoulDetector::evaluate(&mut ctx, BallOn::Colour, Some(Colour::Green));
        assert_eq!(ctx.foul().unwrap().points, 6);
    }

    #[test]
    fn test_endgame_requires_sequence_colour() {
        let mut ctx = ctx_hitting(Some(BallKind::Colour(Colour::Brown)));
        assert!(FoulDetector::evaluate(&mut ctx, BallOn::Sequence(Colour::Yellow), None));

        let mut ctx = ctx_hitting(Some(BallKind::Colour(Colour::Yellow)));
        assert!(!FoulDetector::evaluate(&mut ctx, BallOn::Sequence(Colour::Yellow), None));
    }

    #[test]
    fn test_existing_foul_is_kept() {
        let mut ctx = ctx_hitting(None);
        ctx.commit_foul(5, FoulReason::CueBallPotted);
        assert!(!FoulDetector::evaluate(&mut ctx, BallOn::Red, None));
        assert_eq!(ctx.foul().unwrap().reason, FoulReason::CueBallPotted);
    }
}
