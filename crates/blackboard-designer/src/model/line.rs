use blackboard_core::{CellBounds, FigureError, Position};
use serde::{Deserialize, Serialize};

use super::{expect_params, parse_dimension, positive, FillMode, GlyphShape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "H")]
    Horizontal,
    #[serde(rename = "V")]
    Vertical,
}

impl Direction {
    pub fn as_char(self) -> char {
        match self {
            Direction::Horizontal => 'H',
            Direction::Vertical => 'V',
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" | "h" => Ok(Direction::Horizontal),
            "V" | "v" => Ok(Direction::Vertical),
            other => Err(FigureError::InvalidDirection(other.to_string())),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Straight run of cells going right (`H`) or down (`V`) from the figure position.
/// Lines ignore the fill mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub length: u32,
    pub direction: Direction,
}

impl Line {
    pub fn new(length: i64, direction: Direction) -> Result<Self, FigureError> {
        Ok(Self {
            length: positive("length", length)?,
            direction,
        })
    }

    pub(crate) fn from_params(params: &[&str]) -> Result<Self, FigureError> {
        expect_params("Line", params, 2)?;
        let length = parse_dimension("length", params[0])?;
        let direction = params[1].parse()?;
        Ok(Self { length, direction })
    }

    /// Offset of the `i`-th cell from the start.
    fn step(&self, i: i64) -> (i64, i64) {
        match self.direction {
            Direction::Horizontal => (i, 0),
            Direction::Vertical => (0, i),
        }
    }
}

impl GlyphShape for Line {
    fn name(&self) -> &'static str {
        "Line"
    }

    fn default_glyph(&self) -> char {
        '*'
    }

    fn cell_bounds(&self, origin: Position) -> CellBounds {
        let (x, y) = (origin.x as i64, origin.y as i64);
        let (dx, dy) = self.step(self.length as i64 - 1);
        CellBounds::new(x, y, x + dx, y + dy)
    }

    fn covers(&self, origin: Position, _fill: FillMode, x: i64, y: i64) -> bool {
        let b = self.cell_bounds(origin);
        x >= b.min_x && x <= b.max_x && y >= b.min_y && y <= b.max_y
    }

    fn params(&self) -> Vec<String> {
        vec![self.length.to_string(), self.direction.to_string()]
    }

    fn edit(&mut self, params: &[&str]) -> Result<(), FigureError> {
        *self = Self::from_params(params)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), FigureError> {
        positive("length", self.length as i64).map(|_| ())
    }
}
