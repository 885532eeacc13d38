//! Registry of the balls currently on the table.
//!
//! The `BallRegistry` mirrors what the physics host reports: which balls
//! exist and where they last were. The rules engine removes balls the
//! moment they are reported potted and inserts them again when they are
//! respotted or placed in hand.
//!
//! ```
//! use snooker_rules::table::BallRegistry;
//! use snooker_rules::core::{Ball, BallId, BallKind};
//! use glam::Vec2;
//!
//! let mut registry = BallRegistry::new();
//! registry.insert(Ball::new(BallId(0), BallKind::Cue, Vec2::new(100.0, 100.0)));
//! registry.insert(Ball::new(BallId(1), BallKind::Red, Vec2::new(300.0, 100.0)));
//!
//! assert_eq!(registry.reds_remaining(), 1);
//! assert!(registry.cue_ball().is_some());
//! assert!(registry.is_occupied(Vec2::new(305.0, 100.0), 20.0, None));
//! ```

use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::core::ball::{Ball, BallId, BallKind, Colour};

/// Balls on the table, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct BallRegistry {
    balls: FxHashMap<BallId, Ball>,
}

impl BallRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ball. Replaces any ball with the same id.
    pub fn insert(&mut self, ball: Ball) {
        self.balls.insert(ball.id, ball);
    }

    /// Take a ball off the table.
    pub fn remove(&mut self, id: BallId) -> Option<Ball> {
        self.balls.remove(&id)
    }

    /// Remove every ball.
    pub fn clear(&mut self) {
        self.balls.clear();
    }

    #[must_use]
    pub fn get(&self, id: BallId) -> Option<&Ball> {
        self.balls.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: BallId) -> bool {
        self.balls.contains_key(&id)
    }

    /// Record a position reported by the host.
    ///
    /// Returns false if the ball is not on the table.
    pub fn update_position(&mut self, id: BallId, position: Vec2) -> bool {
        match self.balls.get_mut(&id) {
            Some(ball) => {
                ball.position = position;
                true
            }
            None => false,
        }
    }

    /// Record a batch of reported positions.
    ///
    /// Unknown ids are skipped. Returns how many balls were updated.
    pub fn sync_positions<I>(&mut self, positions: I) -> usize
    where
        I: IntoIterator<Item = (BallId, Vec2)>,
    {
        positions
            .into_iter()
            .filter(|&(id, position)| self.update_position(id, position))
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Iterate over balls in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        let mut balls: Vec<&Ball> = self.balls.values().collect();
        balls.sort_by_key(|ball| ball.id);
        balls.into_iter()
    }

    /// The cue ball, if it is on the table.
    #[must_use]
    pub fn cue_ball(&self) -> Option<&Ball> {
        self.balls.values().find(|ball| ball.is_cue())
    }

    /// The ball of the given colour, if it is on the table.
    #[must_use]
    pub fn colour(&self, colour: Colour) -> Option<&Ball> {
        self.balls
            .values()
            .find(|ball| ball.kind == BallKind::Colour(colour))
    }

    #[must_use]
    pub fn reds_remaining(&self) -> usize {
        self.balls.values().filter(|ball| ball.is_red()).count()
    }

    /// Colours on the table, in sequence order.
    #[must_use]
    pub fn colours_on_table(&self) -> Vec<Colour> {
        Colour::ALL
            .into_iter()
            .filter(|&colour| self.colour(colour).is_some())
            .collect()
    }

    /// Whether any ball (other than `exclude`) has its centre within
    /// `min_distance` of `point`.
    #[must_use]
    pub fn is_occupied(&self, point: Vec2, min_distance: f32, exclude: Option<BallId>) -> bool {
        self.balls
            .values()
            .filter(|ball| Some(ball.id) != exclude)
            .any(|ball| ball.position.distance(point) < min_distance)
    }
}
