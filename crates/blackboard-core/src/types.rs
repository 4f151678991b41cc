//! Grid coordinate types.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
///
/// Columns grow to the right and rows grow downward. Values may be negative or
/// beyond the canvas while a figure is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to a cell, used by round shapes.
    pub fn distance_to(&self, x: i64, y: i64) -> f64 {
        let dx = (x - self.x as i64) as f64;
        let dy = (y - self.y as i64) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive cell extent of a figure: `(min_x, min_y, max_x, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl CellBounds {
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// True when at least one cell of the extent lies on a `width × height` grid.
    pub fn intersects_grid(&self, width: usize, height: usize) -> bool {
        self.max_x >= 0
            && self.min_x < width as i64
            && self.max_y >= 0
            && self.min_y < height as i64
    }
}
