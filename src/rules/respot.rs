//! Returning balls to the table.
//!
//! ## Colours
//!
//! A potted colour goes back on its own spot. If that spot is taken it goes
//! on the highest-value free spot instead. If every spot is taken it goes
//! back on its own spot anyway. That last case can leave two balls
//! overlapping until the host's physics separates them; it is logged and
//! otherwise accepted.
//!
//! ## Cue ball in hand
//!
//! After an in-off the incoming player places the cue ball anywhere in the
//! D that does not touch another ball. The host polls
//! [`RespotManager::can_place_cue_ball`] as the pointer moves and confirms
//! with [`RespotManager::place_cue_ball`].

use glam::Vec2;
use log::{debug, warn};

use crate::core::ball::{Ball, BallKind, Colour};
use crate::core::state::MatchState;
use crate::table::geometry::TableGeometry;
use crate::table::registry::BallRegistry;

/// Spots tried when a colour's own spot is taken, best first.
pub const RESPOT_PRIORITY: [Colour; 6] = [
    Colour::Black,
    Colour::Pink,
    Colour::Blue,
    Colour::Brown,
    Colour::Green,
    Colour::Yellow,
];

pub struct RespotManager;

impl RespotManager {
    /// Where a potted `colour` should be respotted.
    ///
    /// Always returns a position.
    #[must_use]
    pub fn find_available_spot(
        geometry: &TableGeometry,
        registry: &BallRegistry,
        colour: Colour,
    ) -> Vec2 {
        let clearance = 2.0 * geometry.ball_radius;
        let own = geometry.spot(colour);
        if !registry.is_occupied(own, clearance, None) {
            return own;
        }

        let free = RESPOT_PRIORITY
            .iter()
            .filter(|&&c| c != colour)
            .map(|&c| geometry.spot(c))
            .find(|&spot| !registry.is_occupied(spot, clearance, None));

        match free {
            Some(spot) => spot,
            None => {
                warn!("No free spot for {}; respotting on its own occupied spot", colour);
                own
            }
        }
    }

    /// Put potted colours back, highest value first.
    ///
    /// Each colour is placed before the next one is searched for, so two
    /// respots never pick the same free spot.
    pub fn respot_colours(
        state: &mut MatchState,
        geometry: &TableGeometry,
        colours: &[Colour],
    ) -> Vec<Ball> {
        let mut ordered = colours.to_vec();
        ordered.sort_unstable_by(|a, b| b.cmp(a));

        ordered
            .into_iter()
            .map(|colour| {
                let spot = Self::find_available_spot(geometry, &state.registry, colour);
                debug!("Respotting {} at ({:.1}, {:.1})", colour, spot.x, spot.y);
                state.spawn_ball(BallKind::Colour(colour), spot)
            })
            .collect()
    }

    /// Whether the cue ball may be placed at `position`.
    #[must_use]
    pub fn can_place_cue_ball(
        geometry: &TableGeometry,
        registry: &BallRegistry,
        position: Vec2,
    ) -> bool {
        geometry.in_d(position) && !registry.is_occupied(position, 2.0 * geometry.ball_radius, None)
    }

    /// Put the cue ball back on the table at `position` if that is allowed.
    ///
    /// Returns the new cue ball, or `None` if the position was rejected.
    pub fn place_cue_ball(
        state: &mut MatchState,
        geometry: &TableGeometry,
        position: Vec2,
    ) -> Option<Ball> {
        if !Self::can_place_cue_ball(geometry, &state.registry, position) {
            return None;
        }
        Some(state.spawn_ball(BallKind::Cue, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::TableCommand;
    use crate::core::player::PlayerId;

    fn table() -> TableGeometry {
        TableGeometry::default()
    }

    fn state_with(layout: &[(BallKind, Vec2)]) -> MatchState {
        MatchState::with_layout(PlayerId::ONE, layout).unwrap()
    }

    #[test]
    fn test_own_spot_when_free() {
        let geometry = table();
        let registry = BallRegistry::new();
        let spot = RespotManager::find_available_spot(&geometry, &registry, Colour::Green);
        assert_eq!(spot, geometry.spot(Colour::Green));
    }

    #[test]
    fn test_highest_free_spot_when_own_taken() {
        let geometry = table();
        // A red sits on the pink spot; the black spot is taken by the black.
        let state = state_with(&[
            (BallKind::Red, geometry.spot(Colour::Pink) + Vec2::new(5.0, 0.0)),
            (BallKind::Colour(Colour::Black), geometry.spot(Colour::Black)),
        ]);

        // Pink's own spot is blocked, black's is taken, so blue's is next.
        let spot = RespotManager::find_available_spot(&geometry, &state.registry, Colour::Pink);
        assert_eq!(spot, geometry.spot(Colour::Blue));
    }

    #[test]
    fn test_fallback_to_own_spot_when_all_taken() {
        let geometry = table();
        let layout: Vec<(BallKind, Vec2)> = Colour::ALL
            .iter()
            .map(|&c| (BallKind::Red, geometry.spot(c)))
            .collect();
        let state = state_with(&layout);

        let spot = RespotManager::find_available_spot(&geometry, &state.registry, Colour::Blue);
        assert_eq!(spot, geometry.spot(Colour::Blue));
    }

    #[test]
    fn test_respot_colours_queues_spawns() {
        let geometry = table();
        let mut state = state_with(&[]);

        let colours = [Colour::Yellow, Colour::Black];
        let balls = RespotManager::respot_colours(&mut state, &geometry, &colours);
        assert_eq!(balls.len(), 2);
        assert_eq!(balls[0].kind, BallKind::Colour(Colour::Black));
        assert_eq!(balls[1].kind, BallKind::Colour(Colour::Yellow));
        assert_eq!(state.registry.len(), 2);

        let commands = state.drain_commands();
        assert_eq!(commands.len(), 2);
        let black = geometry.spot(Colour::Black);
        assert!(matches!(commands[0], TableCommand::Spawn(b) if b.position == black));
    }

    #[test]
    fn test_two_respots_never_share_a_spot() {
        let geometry = table();
        // Blue's and black's own spots are both blocked by reds.
        let mut state = state_with(&[
            (BallKind::Red, geometry.spot(Colour::Blue)),
            (BallKind::Red, geometry.spot(Colour::Black)),
        ]);

        let colours = [Colour::Blue, Colour::Black];
        let balls = RespotManager::respot_colours(&mut state, &geometry, &colours);
        assert_eq!(balls[0].position, geometry.spot(Colour::Pink));
        assert_ne!(balls[0].position, balls[1].position);
    }

    #[test]
    fn test_cue_placement() {
        let geometry = table();
        let brown = geometry.spot(Colour::Brown);
        let mut state = state_with(&[(BallKind::Colour(Colour::Brown), brown)]);

        // On top of the brown.
        let overlapping = geometry.d_centre() - Vec2::new(5.0, 0.0);
        assert!(!RespotManager::can_place_cue_ball(&geometry, &state.registry, overlapping));
        // Outside the D.
        assert!(!RespotManager::can_place_cue_ball(&geometry, &state.registry, geometry.centre));
        // Just clear of the brown.
        let clear = geometry.d_centre() - Vec2::new(20.0, 0.0);
        assert!(RespotManager::can_place_cue_ball(&geometry, &state.registry, clear));

        let cue = RespotManager::place_cue_ball(&mut state, &geometry, clear).unwrap();
        assert!(cue.is_cue());
        assert!(state.registry.cue_ball().is_some());
        assert!(RespotManager::place_cue_ball(&mut state, &geometry, geometry.centre).is_none());
    }
}
