//!
//! The drawing surface onto which strokes are painted
//!

mod color;
mod draw;
mod storage;

pub use color::Color;
pub use draw::{draw_point, draw_segment};
pub use storage::{Canvas, InvalidCoordinatesError, InvalidSizeError};

/// A position on the canvas in pixel coordinates
///
/// Coordinates may lie outside the canvas (e.g. while a stroke is dragged over the edge).
/// Rendering clips such positions instead of rejecting them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Point {
    /// Horizontal position counted from the left edge
    pub x: i32,
    /// Vertical position counted from the top edge
    pub y: i32,
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
