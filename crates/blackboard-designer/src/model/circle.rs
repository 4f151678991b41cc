use blackboard_core::{CellBounds, FigureError, Position};
use serde::{Deserialize, Serialize};

use super::{expect_params, parse_dimension, positive, FillMode, GlyphShape};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: u32,
}

impl Circle {
    pub fn new(radius: i64) -> Result<Self, FigureError> {
        Ok(Self {
            radius: positive("radius", radius)?,
        })
    }

    pub(crate) fn from_params(params: &[&str]) -> Result<Self, FigureError> {
        expect_params("Circle", params, 1)?;
        Ok(Self {
            radius: parse_dimension("radius", params[0])?,
        })
    }
}

impl GlyphShape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn default_glyph(&self) -> char {
        'O'
    }

    fn cell_bounds(&self, origin: Position) -> CellBounds {
        let r = self.radius as i64;
        let (x, y) = (origin.x as i64, origin.y as i64);
        CellBounds::new(x - r, y - r, x + r, y + r)
    }

    fn covers(&self, origin: Position, fill: FillMode, x: i64, y: i64) -> bool {
        let dist = origin.distance_to(x, y);
        let radius = self.radius as f64;
        match fill {
            FillMode::Fill => dist <= radius,
            FillMode::Frame => (dist - radius).abs() < 0.5,
        }
    }

    fn params(&self) -> Vec<String> {
        vec![self.radius.to_string()]
    }

    fn edit(&mut self, params: &[&str]) -> Result<(), FigureError> {
        *self = Self::from_params(params)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), FigureError> {
        positive("radius", self.radius as i64).map(|_| ())
    }
}
