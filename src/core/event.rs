//! Events exchanged with the physics host.
//!
//! Inbound events ([`TableEvent`]) are reported by the host while balls are
//! moving. Outbound commands ([`TableCommand`]) are queued by the engine
//! and drained by the host, which applies them to its physics world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallId};

/// Two balls touched.
///
/// Order does not matter: the engine looks for the cue ball on either side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub ball_a: BallId,
    pub ball_b: BallId,
}

impl CollisionEvent {
    #[must_use]
    pub fn new(ball_a: BallId, ball_b: BallId) -> Self {
        Self { ball_a, ball_b }
    }

    /// The other ball, if `id` took part in this collision.
    #[must_use]
    pub fn other(&self, id: BallId) -> Option<BallId> {
        if self.ball_a == id {
            Some(self.ball_b)
        } else if self.ball_b == id {
            Some(self.ball_a)
        } else {
            None
        }
    }
}

/// Something the host observed on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableEvent {
    Collision(CollisionEvent),
    /// A ball entered a pocket.
    Potted(BallId),
}

/// A change the host must make to its physics world.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TableCommand {
    /// Create a body for this ball at rest at its position.
    Spawn(Ball),
    /// Drop the body for this ball.
    Remove(BallId),
}

impl TableCommand {
    /// Position of a spawned ball.
    #[must_use]
    pub fn spawn_position(&self) -> Option<Vec2> {
        match self {
            TableCommand::Spawn(ball) => Some(ball.position),
            TableCommand::Remove(_) => None,
        }
    }
}
