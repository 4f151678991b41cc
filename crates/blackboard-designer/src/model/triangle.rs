use blackboard_core::{CellBounds, FigureError, Position};
use serde::{Deserialize, Serialize};

use super::{expect_params, parse_dimension, positive, FillMode, GlyphShape};

/// Isosceles triangle with its apex at the figure position, widening by one
/// cell on each side per row downward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub height: u32,
}

impl Triangle {
    pub fn new(height: i64) -> Result<Self, FigureError> {
        Ok(Self {
            height: positive("height", height)?,
        })
    }

    pub(crate) fn from_params(params: &[&str]) -> Result<Self, FigureError> {
        expect_params("Triangle", params, 1)?;
        Ok(Self {
            height: parse_dimension("height", params[0])?,
        })
    }
}

impl GlyphShape for Triangle {
    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn default_glyph(&self) -> char {
        '^'
    }

    fn cell_bounds(&self, origin: Position) -> CellBounds {
        let h = self.height as i64;
        let (x, y) = (origin.x as i64, origin.y as i64);
        CellBounds::new(x - h + 1, y, x + h - 1, y + h - 1)
    }

    fn covers(&self, origin: Position, fill: FillMode, x: i64, y: i64) -> bool {
        let row = y - origin.y as i64;
        if row < 0 || row >= self.height as i64 {
            return false;
        }
        let offset = (x - origin.x as i64).abs();
        match fill {
            FillMode::Fill => offset <= row,
            // Edges only, except the base row which is drawn solid.
            FillMode::Frame => {
                offset == row || (row == self.height as i64 - 1 && offset <= row)
            }
        }
    }

    fn params(&self) -> Vec<String> {
        vec![self.height.to_string()]
    }

    fn edit(&mut self, params: &[&str]) -> Result<(), FigureError> {
        *self = Self::from_params(params)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), FigureError> {
        positive("height", self.height as i64).map(|_| ())
    }
}
