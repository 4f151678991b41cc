use blackboard_core::{CellBounds, FigureError, Position};
use serde::{Deserialize, Serialize};

use super::{expect_params, parse_dimension, positive, FillMode, GlyphShape};

/// Axis-aligned rectangle; the figure position is its top-left cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(width: i64, height: i64) -> Result<Self, FigureError> {
        Ok(Self {
            width: positive("width", width)?,
            height: positive("height", height)?,
        })
    }

    pub(crate) fn from_params(params: &[&str]) -> Result<Self, FigureError> {
        expect_params("Rectangle", params, 2)?;
        Ok(Self {
            width: parse_dimension("width", params[0])?,
            height: parse_dimension("height", params[1])?,
        })
    }
}

impl GlyphShape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn default_glyph(&self) -> char {
        '#'
    }

    fn cell_bounds(&self, origin: Position) -> CellBounds {
        let (x, y) = (origin.x as i64, origin.y as i64);
        CellBounds::new(
            x,
            y,
            x + self.width as i64 - 1,
            y + self.height as i64 - 1,
        )
    }

    fn covers(&self, origin: Position, fill: FillMode, x: i64, y: i64) -> bool {
        let b = self.cell_bounds(origin);
        let inside = x >= b.min_x && x <= b.max_x && y >= b.min_y && y <= b.max_y;
        if !inside {
            return false;
        }
        match fill {
            FillMode::Fill => true,
            FillMode::Frame => x == b.min_x || x == b.max_x || y == b.min_y || y == b.max_y,
        }
    }

    fn params(&self) -> Vec<String> {
        vec![self.width.to_string(), self.height.to_string()]
    }

    fn edit(&mut self, params: &[&str]) -> Result<(), FigureError> {
        *self = Self::from_params(params)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), FigureError> {
        positive("width", self.width as i64)?;
        positive("height", self.height as i64)?;
        Ok(())
    }
}
