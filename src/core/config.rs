//! Frame configuration.
//!
//! Hosts configure a frame at startup by providing:
//! - `TableGeometry`: playing area and markings
//! - how many reds are racked (15 for a full frame, fewer for short formats)
//! - who breaks
//! - the stationary threshold the host loop should poll with
//!
//! Everything is serialisable so a host can keep it in a JSON settings file.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::error::{Result, RulesError};
use crate::table::geometry::{TableGeometry, FULL_RACK};
use crate::table::physics::STATIONARY_THRESHOLD;

/// Who breaks the first frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breaker {
    /// A fixed player.
    Player(PlayerId),
    /// Chosen by the seeded RNG.
    #[default]
    Random,
}

/// Complete frame configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    pub geometry: TableGeometry,

    /// Reds in the opening rack (1-15).
    pub reds: u8,

    pub breaker: Breaker,

    /// Seed for the breaker draw.
    pub seed: u64,

    /// Per-axis speed below which a ball counts as stopped.
    ///
    /// The engine never polls velocities itself. Hosts pass their snapshot to
    /// `SnookerFrame::balls_stationary`, which applies this threshold.
    pub stationary_threshold: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            geometry: TableGeometry::default(),
            reds: FULL_RACK,
            breaker: Breaker::default(),
            seed: 0,
            stationary_threshold: STATIONARY_THRESHOLD,
        }
    }
}

impl FrameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: TableGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the number of reds racked.
    ///
    /// Panics unless `1 <= reds <= 15`.
    #[must_use]
    pub fn with_reds(mut self, reds: u8) -> Self {
        assert!((1..=FULL_RACK).contains(&reds), "Reds must be 1-15");
        self.reds = reds;
        self
    }

    #[must_use]
    pub fn with_breaker(mut self, breaker: Breaker) -> Self {
        self.breaker = breaker;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_stationary_threshold(mut self, threshold: f32) -> Self {
        self.stationary_threshold = threshold;
        self
    }

    /// Check what the `with_*` setters assert.
    ///
    /// A config read from JSON bypasses the setters, so the builder checks
    /// again before racking.
    pub fn validate(&self) -> Result<()> {
        if !(1..=FULL_RACK).contains(&self.reds) {
            return Err(RulesError::InvalidReds(self.reds));
        }
        Ok(())
    }
}
