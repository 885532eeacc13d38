//! Queries over physics state reported by the host.
//!
//! The engine never steps the simulation. The host loop polls
//! [`balls_stationary`] against its own velocity snapshot every tick and
//! calls `on_balls_stationary` once it holds.

use glam::Vec2;

/// Default per-axis speed below which a ball counts as stopped.
pub const STATIONARY_THRESHOLD: f32 = 0.15;

/// Whether every velocity in the snapshot is below `threshold` on both axes.
///
/// An empty snapshot is stationary.
///
/// ```
/// use snooker_rules::table::balls_stationary;
/// use glam::Vec2;
///
/// assert!(balls_stationary([Vec2::new(0.1, -0.1), Vec2::ZERO], 0.15));
/// assert!(!balls_stationary([Vec2::new(0.0, 0.3)], 0.15));
/// ```
pub fn balls_stationary<I>(velocities: I, threshold: f32) -> bool
where
    I: IntoIterator<Item = Vec2>,
{
    velocities
        .into_iter()
        .all(|v| v.x.abs() < threshold && v.y.abs() < threshold)
}
