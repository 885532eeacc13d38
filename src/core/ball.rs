//! Ball identification and classification.
//!
//! Every ball on the table has a unique `BallId`, allocated by the frame
//! when the ball is created (setup or respot). A ball's `kind` is a closed
//! variant; its point value is derived from the kind and never stored.
//!
//! ```
//! use snooker_rules::core::{Ball, BallId, BallKind, Colour};
//! use glam::Vec2;
//!
//! let pink = Ball::new(BallId(7), BallKind::Colour(Colour::Pink), Vec2::ZERO);
//! assert_eq!(pink.value(), 6);
//! assert!(pink.is_colour());
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Unique identifier for a ball within a frame.
///
/// IDs are never reused inside a frame: a respotted colour gets a new ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BallId(pub u32);

impl std::fmt::Display for BallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ball({})", self.0)
    }
}

/// The six colours, in potting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Colour {
    Yellow,
    Green,
    Brown,
    Blue,
    Pink,
    Black,
}

impl Colour {
    /// All colours in ascending value (and endgame) order.
    pub const ALL: [Colour; 6] = [
        Colour::Yellow,
        Colour::Green,
        Colour::Brown,
        Colour::Blue,
        Colour::Pink,
        Colour::Black,
    ];

    /// Point value of the colour.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Colour::Yellow => 2,
            Colour::Green => 3,
            Colour::Brown => 4,
            Colour::Blue => 5,
            Colour::Pink => 6,
            Colour::Black => 7,
        }
    }

    /// Lower-case display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Colour::Yellow => "yellow",
            Colour::Green => "green",
            Colour::Brown => "brown",
            Colour::Blue => "blue",
            Colour::Pink => "pink",
            Colour::Black => "black",
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a ball is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallKind {
    Cue,
    Red,
    Colour(Colour),
}

impl BallKind {
    /// Point value: cue 0, red 1, colours 2-7.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            BallKind::Cue => 0,
            BallKind::Red => 1,
            BallKind::Colour(colour) => colour.value(),
        }
    }
}

impl std::fmt::Display for BallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BallKind::Cue => f.write_str("cue ball"),
            BallKind::Red => f.write_str("red"),
            BallKind::Colour(colour) => write!(f, "{}", colour),
        }
    }
}

/// A ball as the rules engine sees it.
///
/// `position` is the last position reported by the physics host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: BallId,
    pub kind: BallKind,
    pub position: Vec2,
}

impl Ball {
    #[must_use]
    pub fn new(id: BallId, kind: BallKind, position: Vec2) -> Self {
        Self { id, kind, position }
    }

    /// Point value of this ball.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    #[must_use]
    pub fn is_cue(&self) -> bool {
        matches!(self.kind, BallKind::Cue)
    }

    #[must_use]
    pub fn is_red(&self) -> bool {
        matches!(self.kind, BallKind::Red)
    }

    #[must_use]
    pub fn is_colour(&self) -> bool {
        matches!(self.kind, BallKind::Colour(_))
    }

    /// The colour of this ball, if it is one of the six colours.
    #[must_use]
    pub fn colour(&self) -> Option<Colour> {
        match self.kind {
            BallKind::Colour(colour) => Some(colour),
            BallKind::Cue | BallKind::Red => None,
        }
    }
}
