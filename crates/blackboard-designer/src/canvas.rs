//! Fixed-size glyph grid the board paints figures onto.

use blackboard_core::BLANK_GLYPH;

/// Row-major grid of single-character cells.
///
/// Painting outside the grid is silently ignored, so shapes clip at the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Creates a blank canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK_GLYPH; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resets every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK_GLYPH);
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Sets a cell, skipping coordinates off the grid.
    pub fn paint(&mut self, x: i64, y: i64, glyph: char) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = glyph;
        }
    }

    /// Glyph at a cell, or `None` off the grid.
    pub fn glyph_at(&self, x: i64, y: i64) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == BLANK_GLYPH)
    }

    /// Exactly `height` rows of exactly `width` glyphs each.
    pub fn rows(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height];
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
