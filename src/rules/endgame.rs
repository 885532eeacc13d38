//! Colour sequence once the reds are gone.
//!
//! The sequencer switches on once per frame and never switches off. From
//! then on the colours must be potted in value order, yellow to black, and
//! each legal pot moves the requirement along.
//!
//! ```
//! use snooker_rules::rules::EndgameSequencer;
//! use snooker_rules::core::Colour;
//!
//! let mut endgame = EndgameSequencer::new();
//! assert_eq!(endgame.activate(), Colour::Yellow);
//! assert_eq!(endgame.advance(), Some(Colour::Green));
//! assert!(endgame.is_active());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::ball::Colour;

/// The fixed endgame order.
pub const COLOUR_SEQUENCE: [Colour; 6] = Colour::ALL;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndgameSequencer {
    active: bool,
    index: usize,
}

impl EndgameSequencer {
    /// An inactive sequencer for a fresh frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An active sequencer already requiring `colour`.
    #[must_use]
    pub fn at(colour: Colour) -> Self {
        let index = COLOUR_SEQUENCE
            .iter()
            .position(|&c| c == colour)
            .unwrap_or_default();
        Self {
            active: true,
            index,
        }
    }

    /// Switch the sequence on. Repeated calls leave the position alone.
    ///
    /// Returns the colour now required.
    pub fn activate(&mut self) -> Colour {
        self.active = true;
        COLOUR_SEQUENCE[self.index]
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Position in the sequence (0 = yellow).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The colour required next, while active and not yet complete.
    #[must_use]
    pub fn required(&self) -> Option<Colour> {
        if !self.active {
            return None;
        }
        COLOUR_SEQUENCE.get(self.index).copied()
    }

    /// Record a legal pot of the required colour.
    ///
    /// Returns the next required colour, or `None` once black has gone.
    pub fn advance(&mut self) -> Option<Colour> {
        if !self.active || self.index >= COLOUR_SEQUENCE.len() {
            return None;
        }
        self.index += 1;
        self.required()
    }

    /// Whether every colour has been potted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.active && self.index >= COLOUR_SEQUENCE.len()
    }

    /// Back to inactive, for a new frame.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
