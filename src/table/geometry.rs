//! Table geometry: playing area, baulk line, D, spots and pockets.
//!
//! The table lies along the x axis with the baulk end on the left. All
//! derived positions (spots, D, pockets) are computed from the playing area
//! so a host only needs to supply the centre and size of the felt.
//!
//! ```
//! use snooker_rules::table::TableGeometry;
//! use snooker_rules::core::Colour;
//!
//! let table = TableGeometry::default();
//! assert_eq!(table.spot(Colour::Brown), table.d_centre());
//! assert!(table.in_d(table.d_centre()));
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::ball::{BallKind, Colour};

/// Number of reds in a full rack.
pub const FULL_RACK: u8 = 15;

/// Gap between the pink and the apex red.
const APEX_GAP: f32 = 2.0;

/// Static description of the playing surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableGeometry {
    /// Centre of the playing area (inside the cushions).
    pub centre: Vec2,

    /// Length of the playing area along x.
    pub width: f32,

    /// Width of the playing area along y.
    pub height: f32,

    pub ball_radius: f32,

    /// A ball whose centre is closer than this to a pocket centre has dropped.
    pub pocket_radius: f32,
}

impl Default for TableGeometry {
    fn default() -> Self {
        Self {
            centre: Vec2::new(500.0, 250.0),
            width: 1000.0,
            height: 500.0,
            ball_radius: 10.0,
            pocket_radius: 16.0,
        }
    }
}

impl TableGeometry {
    /// Create a geometry for a playing area of the given size.
    #[must_use]
    pub fn new(centre: Vec2, width: f32, height: f32) -> Self {
        Self {
            centre,
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ball_radius(mut self, radius: f32) -> Self {
        self.ball_radius = radius;
        self
    }

    #[must_use]
    pub fn with_pocket_radius(mut self, radius: f32) -> Self {
        self.pocket_radius = radius;
        self
    }

    #[must_use]
    pub fn min(&self) -> Vec2 {
        self.centre - Vec2::new(self.width, self.height) / 2.0
    }

    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.centre + Vec2::new(self.width, self.height) / 2.0
    }

    /// x coordinate of the baulk line, a fifth of the way up the table.
    #[must_use]
    pub fn baulk_x(&self) -> f32 {
        self.min().x + self.width / 5.0
    }

    /// Where the baulk line crosses the long centre line.
    #[must_use]
    pub fn d_centre(&self) -> Vec2 {
        Vec2::new(self.baulk_x(), self.centre.y)
    }

    #[must_use]
    pub fn d_radius(&self) -> f32 {
        self.height / 6.0
    }

    /// Whether a point lies inside the D (semicircle on the baulk side).
    #[must_use]
    pub fn in_d(&self, point: Vec2) -> bool {
        point.x <= self.baulk_x() && point.distance(self.d_centre()) <= self.d_radius()
    }

    /// Canonical spot of a colour.
    #[must_use]
    pub fn spot(&self, colour: Colour) -> Vec2 {
        let d = self.d_centre();
        match colour {
            Colour::Yellow => Vec2::new(d.x, d.y + self.d_radius()),
            Colour::Green => Vec2::new(d.x, d.y - self.d_radius()),
            Colour::Brown => d,
            Colour::Blue => self.centre,
            Colour::Pink => Vec2::new(self.centre.x + self.width / 4.0, self.centre.y),
            Colour::Black => Vec2::new(self.max().x - self.width / 11.0, self.centre.y),
        }
    }

    /// The six pockets: four corners and the middles of the long cushions.
    #[must_use]
    pub fn pockets(&self) -> [Vec2; 6] {
        let min = self.min();
        let max = self.max();
        [
            Vec2::new(min.x, min.y),
            Vec2::new(self.centre.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(min.x, max.y),
            Vec2::new(self.centre.x, max.y),
            Vec2::new(max.x, max.y),
        ]
    }

    /// Index of the pocket a ball at `point` has dropped into, if any.
    #[must_use]
    pub fn pocket_at(&self, point: Vec2) -> Option<usize> {
        self.pockets()
            .iter()
            .position(|pocket| pocket.distance(point) < self.pocket_radius)
    }

    /// Starting position of the cue ball, inside the D.
    #[must_use]
    pub fn cue_start(&self) -> Vec2 {
        self.d_centre() - Vec2::new(self.d_radius() / 3.0, 0.0)
    }

    /// Positions for `count` reds packed in a triangle behind the pink,
    /// apex first.
    #[must_use]
    pub fn red_triangle(&self, count: u8) -> Vec<Vec2> {
        let r = self.ball_radius;
        let apex = self.spot(Colour::Pink) + Vec2::new(2.0 * r + APEX_GAP, 0.0);
        let row_step = r * 3.0_f32.sqrt();

        let mut positions = Vec::with_capacity(count as usize);
        let mut row = 0u8;
        while positions.len() < count as usize {
            let x = apex.x + f32::from(row) * row_step;
            let top = apex.y - r * f32::from(row);
            for i in 0..=row {
                if positions.len() == count as usize {
                    break;
                }
                positions.push(Vec2::new(x, top + f32::from(i) * 2.0 * r));
            }
            row += 1;
        }
        positions
    }

    /// The full frame layout: cue ball, six colours on their spots, reds.
    #[must_use]
    pub fn rack(&self, reds: u8) -> Vec<(BallKind, Vec2)> {
        let mut layout = Vec::with_capacity(7 + reds as usize);
        layout.push((BallKind::Cue, self.cue_start()));
        for colour in Colour::ALL {
            layout.push((BallKind::Colour(colour), self.spot(colour)));
        }
        for position in self.red_triangle(reds) {
            layout.push((BallKind::Red, position));
        }
        layout
    }
}
