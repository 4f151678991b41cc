//! A shape placed on the board with its position, color and fill mode.

use blackboard_core::{FigureError, Position};
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::model::{FillMode, GlyphShape, Shape, ShapeType};

/// Figure that can be selected and manipulated on the board.
///
/// The `id` is `0` until the board accepts the figure and is ignored by
/// [`Figure::is_equal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    #[serde(skip)]
    id: u64,
    pub position: Position,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub fill: FillMode,
    pub shape: Shape,
}

impl Figure {
    pub fn new(
        shape: impl Into<Shape>,
        position: Position,
        color: impl Into<String>,
        fill: FillMode,
    ) -> Self {
        Self {
            id: 0,
            position,
            color: color.into(),
            fill,
            shape: shape.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = Position::new(x, y);
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Lowercased first character of the color, or the shape's default glyph.
    pub fn glyph(&self) -> char {
        match self.color.chars().next() {
            Some(c) => c.to_lowercase().next().unwrap_or(c),
            None => self.shape.default_glyph(),
        }
    }

    pub fn rasterize(&self, canvas: &mut Canvas) {
        self.shape
            .rasterize(self.position, self.fill, self.glyph(), canvas);
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.shape
            .covers(self.position, self.fill, x as i64, y as i64)
    }

    /// True when the shape's extent intersects a `width × height` canvas.
    pub fn is_within_board(&self, width: usize, height: usize) -> bool {
        self.shape
            .cell_bounds(self.position)
            .intersects_grid(width, height)
    }

    /// Structural equality on everything but the id.
    pub fn is_equal(&self, other: &Figure) -> bool {
        self.position == other.position
            && self.color == other.color
            && self.fill == other.fill
            && self.shape == other.shape
    }

    /// Replaces the shape parameters, keeping the variant.
    pub fn edit(&mut self, params: &[&str]) -> Result<(), FigureError> {
        self.shape.edit(params)
    }

    /// One-line summary: `<Kind> <id> <x> <y> <params…> <fill|frame> <color>`.
    pub fn describe(&self) -> String {
        let mut parts = vec![
            self.shape.name().to_string(),
            self.id.to_string(),
            self.position.x.to_string(),
            self.position.y.to_string(),
        ];
        parts.extend(self.shape.params());
        parts.push(self.fill.to_string());
        if !self.color.is_empty() {
            parts.push(self.color.clone());
        }
        parts.join(" ")
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
