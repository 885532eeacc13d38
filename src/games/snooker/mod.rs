//! Two-player snooker frames.
//!
//! A frame is racked with fifteen reds (fewer for short formats), six
//! colours on their spots and the cue ball in the D:
//! - Reds and colours are potted alternately while reds remain
//! - A red is worth 1, the colours 2 to 7
//! - Fouls award at least 4 points to the opponent
//! - With the reds gone, the colours are taken in order, yellow to black
//! - The frame ends on the final black, or once the lead exceeds the points
//!   left on the table

mod frame;

pub use frame::{FrameBuilder, SnookerFrame};
