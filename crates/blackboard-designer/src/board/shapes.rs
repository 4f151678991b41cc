//! Figure mutations (add, remove, move, paint, edit) for the board.

use blackboard_core::BoardError;

use super::Board;
use crate::figure::Figure;

impl Board {
    /// Validates and appends a figure, painting it over the current canvas.
    ///
    /// Returns the assigned id. A rejected figure is dropped and the board is
    /// unchanged.
    pub fn add_figure(&mut self, mut figure: Figure) -> Result<u64, BoardError> {
        if !figure.is_within_board(self.width(), self.height()) {
            tracing::warn!("Rejected {} outside the board", figure.shape.shape_type());
            return Err(BoardError::OutOfBounds);
        }
        if self.figures.iter().any(|existing| existing.is_equal(&figure)) {
            tracing::warn!("Rejected duplicate {}", figure.shape.shape_type());
            return Err(BoardError::Duplicate);
        }

        let id = self.next_id;
        self.next_id += 1;
        figure.set_id(id);
        // New figures go on top, so painting over the canvas matches a redraw.
        figure.rasterize(&mut self.canvas);
        tracing::debug!("Added figure {}: {}", id, figure.describe());
        self.figures.push(figure);
        Ok(id)
    }

    /// Removes a figure by id and redraws.
    pub fn remove_figure(&mut self, id: u64) -> Result<Figure, BoardError> {
        let idx = self.index_of(id).ok_or(BoardError::NotFound(id))?;
        let figure = self.figures.remove(idx);
        self.selection.forget(id);
        self.redraw();
        tracing::debug!("Removed figure {}", id);
        Ok(figure)
    }

    /// Removes the selected figure and clears the selection.
    pub fn remove_selected(&mut self) -> Result<Figure, BoardError> {
        let id = self.selected_id().ok_or(BoardError::NoSelection)?;
        let figure = self.remove_figure(id)?;
        self.selection.deselect();
        Ok(figure)
    }

    /// Removes the topmost figure.
    pub fn remove_last(&mut self) -> Result<Figure, BoardError> {
        let id = self
            .figures
            .last()
            .map(Figure::id)
            .ok_or(BoardError::EmptyBoard)?;
        self.remove_figure(id)
    }

    /// Moves the selected figure and promotes it to the top of the draw order.
    ///
    /// The position is updated before the bounds test. When the test fails the
    /// figure keeps the new position, stays where it was in the sequence and
    /// the canvas is not redrawn, so the display lags the model until the next
    /// full redraw.
    pub fn move_selected(&mut self, x: i32, y: i32) -> Result<&Figure, BoardError> {
        let idx = self.selected_index()?;
        let (width, height) = (self.width(), self.height());

        let figure = &mut self.figures[idx];
        figure.set_position(x, y);
        if !figure.is_within_board(width, height) {
            tracing::warn!("Figure {} moved out of bounds to ({}, {})", figure.id(), x, y);
            return Err(BoardError::OutOfBounds);
        }

        let figure = self.figures.remove(idx);
        tracing::debug!("Moved figure {} to ({}, {})", figure.id(), x, y);
        self.figures.push(figure);
        self.redraw();
        let last = self.figures.len() - 1;
        Ok(&self.figures[last])
    }

    /// Changes the selected figure's color and redraws.
    pub fn paint_selected(&mut self, color: &str) -> Result<&Figure, BoardError> {
        let idx = self.selected_index()?;
        self.figures[idx].set_color(color);
        tracing::debug!("Painted figure {} {}", self.figures[idx].id(), color);
        self.redraw();
        Ok(&self.figures[idx])
    }

    /// Replaces the selected figure's shape parameters and redraws.
    ///
    /// Parameter errors leave the figure untouched. Parameters that are valid
    /// but push the figure off the board are kept and reported as
    /// [`BoardError::OutOfBounds`] without a redraw, like [`Board::move_selected`].
    pub fn edit_selected(&mut self, params: &[&str]) -> Result<&Figure, BoardError> {
        let idx = self.selected_index()?;
        let (width, height) = (self.width(), self.height());

        let figure = &mut self.figures[idx];
        figure.edit(params)?;
        if !figure.is_within_board(width, height) {
            tracing::warn!("Edited figure {} is out of bounds", figure.id());
            return Err(BoardError::OutOfBounds);
        }

        tracing::debug!("Edited figure {}: {}", figure.id(), figure.describe());
        self.redraw();
        Ok(&self.figures[idx])
    }
}
