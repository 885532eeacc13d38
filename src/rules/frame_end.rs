//! When a frame is decided.
//!
//! A frame ends when the last black goes down in sequence, or when the
//! trailing player can no longer catch up with what is left on the table.

use super::ball_on::BallOn;
use crate::core::ball::Colour;
use crate::core::player::PlayerId;
use crate::table::registry::BallRegistry;

/// Best colour available after each red.
const BEST_COLOUR: u32 = Colour::Black.value();

/// The most points still available to the players.
///
/// With reds left, every red can be followed by the black and the six
/// colours are still to come: `reds * 8 + 27`. Once the reds are gone it is
/// the sum of the colours still on the table, plus a black's worth if the
/// striker still owes a colour for the last red.
#[must_use]
pub fn points_remaining_on_table(registry: &BallRegistry, ball_on: BallOn) -> u32 {
    let reds = registry.reds_remaining() as u32;
    if reds > 0 {
        let colours: u32 = Colour::ALL.iter().map(|c| c.value()).sum();
        return reds * (1 + BEST_COLOUR) + colours;
    }

    let on_table: u32 = registry.colours_on_table().iter().map(|c| c.value()).sum();
    match ball_on {
        BallOn::Colour => on_table + BEST_COLOUR,
        BallOn::Red | BallOn::Sequence(_) => on_table,
    }
}

/// Whether the lead exceeds what is left to play for.
#[must_use]
pub fn frame_decided(lead: u32, remaining: u32) -> bool {
    lead > remaining
}

/// The player ahead, or `None` on level scores.
#[must_use]
pub fn leader(score_one: u32, score_two: u32) -> Option<PlayerId> {
    match score_one.cmp(&score_two) {
        std::cmp::Ordering::Greater => Some(PlayerId::ONE),
        std::cmp::Ordering::Less => Some(PlayerId::TWO),
        std::cmp::Ordering::Equal => None,
    }
}
