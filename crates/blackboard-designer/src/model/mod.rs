use blackboard_core::{CellBounds, FigureError, Position};
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;

mod circle;
mod line;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use line::{Direction, Line};
pub use rectangle::Rectangle;
pub use triangle::Triangle;

/// Solid fill or outline only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    Fill,
    #[default]
    Frame,
}

impl FillMode {
    pub fn is_filled(self) -> bool {
        matches!(self, FillMode::Fill)
    }
}

impl std::fmt::Display for FillMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fill => write!(f, "fill"),
            Self::Frame => write!(f, "frame"),
        }
    }
}

impl std::str::FromStr for FillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fill" => Ok(Self::Fill),
            "frame" => Ok(Self::Frame),
            _ => Err(s.to_string()),
        }
    }
}

/// Geometry of one shape kind, anchored at a figure's position.
///
/// `covers` is the single source of truth for both painting and hit-testing,
/// so a cell is selectable exactly when rasterizing the shape alone paints it.
pub trait GlyphShape {
    /// Display name, e.g. `Circle`.
    fn name(&self) -> &'static str;

    /// Glyph used when the figure has no color.
    fn default_glyph(&self) -> char;

    /// Inclusive extent of every cell the shape can paint.
    fn cell_bounds(&self, origin: Position) -> CellBounds;

    /// Whether the shape paints cell `(x, y)`.
    fn covers(&self, origin: Position, fill: FillMode, x: i64, y: i64) -> bool;

    /// Shape parameters in construction order.
    fn params(&self) -> Vec<String>;

    /// Replace the shape parameters. Nothing changes on error.
    fn edit(&mut self, params: &[&str]) -> Result<(), FigureError>;

    /// Re-check invariants, used after deserialization.
    fn validate(&self) -> Result<(), FigureError>;

    fn rasterize(&self, origin: Position, fill: FillMode, glyph: char, canvas: &mut Canvas) {
        let bounds = self.cell_bounds(origin);
        let x0 = bounds.min_x.max(0);
        let x1 = bounds.max_x.min(canvas.width() as i64 - 1);
        let y0 = bounds.min_y.max(0);
        let y1 = bounds.max_y.min(canvas.height() as i64 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                if self.covers(origin, fill, x, y) {
                    canvas.paint(x, y, glyph);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Circle,
    Rectangle,
    Line,
    Triangle,
}

impl ShapeType {
    /// Keyword used by commands and save files.
    pub fn keyword(self) -> &'static str {
        match self {
            ShapeType::Circle => "circle",
            ShapeType::Rectangle => "rectangle",
            ShapeType::Line => "line",
            ShapeType::Triangle => "triangle",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "circle" => Some(ShapeType::Circle),
            "rectangle" => Some(ShapeType::Rectangle),
            "line" => Some(ShapeType::Line),
            "triangle" => Some(ShapeType::Triangle),
            _ => None,
        }
    }

    /// Number of shape parameters after the position.
    pub fn param_count(self) -> usize {
        match self {
            ShapeType::Circle | ShapeType::Triangle => 1,
            ShapeType::Rectangle | ShapeType::Line => 2,
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Line(Line),
    Triangle(Triangle),
}

impl GlyphShape for Shape {
    fn name(&self) -> &'static str {
        match self {
            Shape::Circle(s) => s.name(),
            Shape::Rectangle(s) => s.name(),
            Shape::Line(s) => s.name(),
            Shape::Triangle(s) => s.name(),
        }
    }

    fn default_glyph(&self) -> char {
        match self {
            Shape::Circle(s) => s.default_glyph(),
            Shape::Rectangle(s) => s.default_glyph(),
            Shape::Line(s) => s.default_glyph(),
            Shape::Triangle(s) => s.default_glyph(),
        }
    }

    fn cell_bounds(&self, origin: Position) -> CellBounds {
        match self {
            Shape::Circle(s) => s.cell_bounds(origin),
            Shape::Rectangle(s) => s.cell_bounds(origin),
            Shape::Line(s) => s.cell_bounds(origin),
            Shape::Triangle(s) => s.cell_bounds(origin),
        }
    }

    fn covers(&self, origin: Position, fill: FillMode, x: i64, y: i64) -> bool {
        match self {
            Shape::Circle(s) => s.covers(origin, fill, x, y),
            Shape::Rectangle(s) => s.covers(origin, fill, x, y),
            Shape::Line(s) => s.covers(origin, fill, x, y),
            Shape::Triangle(s) => s.covers(origin, fill, x, y),
        }
    }

    fn params(&self) -> Vec<String> {
        match self {
            Shape::Circle(s) => s.params(),
            Shape::Rectangle(s) => s.params(),
            Shape::Line(s) => s.params(),
            Shape::Triangle(s) => s.params(),
        }
    }

    fn edit(&mut self, params: &[&str]) -> Result<(), FigureError> {
        match self {
            Shape::Circle(s) => s.edit(params),
            Shape::Rectangle(s) => s.edit(params),
            Shape::Line(s) => s.edit(params),
            Shape::Triangle(s) => s.edit(params),
        }
    }

    fn validate(&self) -> Result<(), FigureError> {
        match self {
            Shape::Circle(s) => s.validate(),
            Shape::Rectangle(s) => s.validate(),
            Shape::Line(s) => s.validate(),
            Shape::Triangle(s) => s.validate(),
        }
    }

    fn rasterize(&self, origin: Position, fill: FillMode, glyph: char, canvas: &mut Canvas) {
        match self {
            Shape::Circle(s) => s.rasterize(origin, fill, glyph, canvas),
            Shape::Rectangle(s) => s.rasterize(origin, fill, glyph, canvas),
            Shape::Line(s) => s.rasterize(origin, fill, glyph, canvas),
            Shape::Triangle(s) => s.rasterize(origin, fill, glyph, canvas),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Line(_) => ShapeType::Line,
            Shape::Triangle(_) => ShapeType::Triangle,
        }
    }

    /// Builds a shape from its parameter tokens (everything after the position).
    pub fn from_params(shape_type: ShapeType, params: &[&str]) -> Result<Self, FigureError> {
        let shape = match shape_type {
            ShapeType::Circle => Shape::Circle(Circle::from_params(params)?),
            ShapeType::Rectangle => Shape::Rectangle(Rectangle::from_params(params)?),
            ShapeType::Line => Shape::Line(Line::from_params(params)?),
            ShapeType::Triangle => Shape::Triangle(Triangle::from_params(params)?),
        };
        Ok(shape)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Self {
        Shape::Line(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Shape::Triangle(s)
    }
}

/// Checks a dimension is strictly positive and fits the grid's coordinate range.
pub(crate) fn positive(name: &'static str, value: i64) -> Result<u32, FigureError> {
    if value <= 0 || value > i32::MAX as i64 {
        return Err(FigureError::InvalidDimension { name, value });
    }
    Ok(value as u32)
}

pub(crate) fn parse_int(token: &str) -> Result<i64, FigureError> {
    token
        .parse::<i64>()
        .map_err(|_| FigureError::InvalidNumber(token.to_string()))
}

pub(crate) fn parse_dimension(name: &'static str, token: &str) -> Result<u32, FigureError> {
    positive(name, parse_int(token)?)
}

pub(crate) fn expect_params(
    shape: &'static str,
    params: &[&str],
    expected: usize,
) -> Result<(), FigureError> {
    if params.len() != expected {
        return Err(FigureError::ParameterCount {
            shape,
            expected,
            found: params.len(),
        });
    }
    Ok(())
}
