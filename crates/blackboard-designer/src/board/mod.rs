//! Board entity manager.
//! Owns the figure sequence, the glyph canvas, the id allocator and the
//! selection cursor, and validates every mutation before touching the canvas.
//!
//! This module is split into submodules:
//! - `selection`: select by id, by point, deselect
//! - `shapes`: add, remove, move, paint, edit
//! - `file_io`: save/load

mod file_io;
mod selection;
mod shapes;

use blackboard_core::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

use crate::canvas::Canvas;
use crate::figure::Figure;
use crate::selection_manager::SelectionManager;

/// The drawing board.
///
/// Sequence order is draw order: later figures are painted last and sit on
/// top. After every successful operation the canvas equals the in-order
/// rasterization of the sequence onto a blank grid.
#[derive(Debug, Clone)]
pub struct Board {
    figures: Vec<Figure>,
    canvas: Canvas,
    selection: SelectionManager,
    next_id: u64,
}

impl Board {
    /// Creates an empty board with a blank `width × height` canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            figures: Vec::new(),
            canvas: Canvas::new(width, height),
            selection: SelectionManager::new(),
            next_id: 1,
        }
    }

    pub fn width(&self) -> usize {
        self.canvas.width()
    }

    pub fn height(&self) -> usize {
        self.canvas.height()
    }

    /// Number of figures on the board.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Figures in draw order.
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn figure(&self, id: u64) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id() == id)
    }

    pub(crate) fn index_of(&self, id: u64) -> Option<usize> {
        self.figures.iter().position(|f| f.id() == id)
    }

    /// Id the next accepted figure will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Glyph currently displayed at a cell.
    pub fn glyph_at(&self, x: i64, y: i64) -> Option<char> {
        self.canvas.glyph_at(x, y)
    }

    /// Repaints the canvas from scratch in sequence order.
    pub fn redraw(&mut self) {
        self.canvas.clear();
        for figure in &self.figures {
            figure.rasterize(&mut self.canvas);
        }
    }

    /// Removes every figure, resets ids to 1 and blanks the canvas.
    pub fn clear_all(&mut self) {
        self.figures.clear();
        self.canvas.clear();
        self.selection.deselect();
        self.next_id = 1;
        tracing::info!("Board cleared");
    }

    /// Description of every figure in draw order.
    pub fn list_figures(&self) -> Vec<String> {
        self.figures.iter().map(Figure::describe).collect()
    }

    /// Canvas rows, `height` lines of `width` glyphs.
    pub fn rows(&self) -> Vec<String> {
        self.canvas.rows()
    }

    /// Canvas as text, one newline-terminated line per row.
    pub fn render(&self) -> String {
        self.canvas.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}
