//! The "ball on": what may legally be struck first.

use serde::{Deserialize, Serialize};

use crate::core::ball::{BallKind, Colour};

/// What the striker must hit first.
///
/// Before the endgame this alternates between `Red` and `Colour`. Once the
/// reds are gone it names the single colour the sequence requires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallOn {
    #[default]
    Red,
    /// Any colour, narrowed to the nominated one when a nomination exists.
    Colour,
    /// Endgame: exactly this colour.
    Sequence(Colour),
}

impl BallOn {
    /// Whether a ball of `kind` is on.
    ///
    /// ```
    /// use snooker_rules::rules::BallOn;
    /// use snooker_rules::core::{BallKind, Colour};
    ///
    /// assert!(BallOn::Colour.admits(BallKind::Colour(Colour::Pink), None));
    /// assert!(!BallOn::Colour.admits(BallKind::Colour(Colour::Pink), Some(Colour::Blue)));
    /// assert!(!BallOn::Red.admits(BallKind::Colour(Colour::Pink), None));
    /// ```
    #[must_use]
    pub fn admits(self, kind: BallKind, nominated: Option<Colour>) -> bool {
        match (self, kind) {
            (BallOn::Red, BallKind::Red) => true,
            (BallOn::Colour, BallKind::Colour(colour)) => nominated.map_or(true, |n| n == colour),
            (BallOn::Sequence(required), BallKind::Colour(colour)) => required == colour,
            (BallOn::Red | BallOn::Colour | BallOn::Sequence(_), _) => false,
        }
    }

    /// Value of the ball on, used as a floor for some foul awards.
    ///
    /// An un-nominated `Colour` counts as 0.
    #[must_use]
    pub fn value(self, nominated: Option<Colour>) -> u32 {
        match self {
            BallOn::Red => 1,
            BallOn::Colour => nominated.map_or(0, Colour::value),
            BallOn::Sequence(colour) => colour.value(),
        }
    }

    #[must_use]
    pub fn is_endgame(self) -> bool {
        matches!(self, BallOn::Sequence(_))
    }
}

impl std::fmt::Display for BallOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BallOn::Red => f.write_str("red"),
            BallOn::Colour => f.write_str("colour"),
            BallOn::Sequence(colour) => write!(f, "{}", colour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_admits_only_red() {
        assert!(BallOn::Red.admits(BallKind::Red, None));
        assert!(!BallOn::Red.admits(BallKind::Cue, None));
        for colour in Colour::ALL {
            assert!(!BallOn::Red.admits(BallKind::Colour(colour), Some(colour)));
        }
    }

    #[test]
    fn test_colour_respects_nomination() {
        let blue = BallKind::Colour(Colour::Blue);
        assert!(BallOn::Colour.admits(blue, Some(Colour::Blue)));
        assert!(!BallOn::Colour.admits(blue, Some(Colour::Black)));
        assert!(!BallOn::Colour.admits(BallKind::Red, None));
    }

    #[test]
    fn test_sequence_ignores_nomination() {
        let on = BallOn::Sequence(Colour::Green);
        assert!(on.admits(BallKind::Colour(Colour::Green), Some(Colour::Black)));
        assert!(!on.admits(BallKind::Colour(Colour::Black), Some(Colour::Black)));
    }

    #[test]
    fn test_value() {
        assert_eq!(BallOn::Red.value(None), 1);
        assert_eq!(BallOn::Colour.value(None), 0);
        assert_eq!(BallOn::Colour.value(Some(Colour::Pink)), 6);
        assert_eq!(BallOn::Sequence(Colour::Brown).value(None), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(BallOn::Red.to_string(), "red");
        assert_eq!(BallOn::Sequence(Colour::Black).to_string(), "black");
    }
}
