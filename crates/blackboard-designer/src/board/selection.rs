//! Selection operations for the board.

use blackboard_core::BoardError;

use super::Board;
use crate::figure::Figure;

impl Board {
    /// Currently selected figure id.
    pub fn selected_id(&self) -> Option<u64> {
        self.selection.selected_id()
    }

    /// Currently selected figure.
    pub fn selected(&self) -> Option<&Figure> {
        self.selection.selected_id().and_then(|id| self.figure(id))
    }

    /// Selects a figure by id.
    pub fn select_figure(&mut self, id: u64) -> Result<&Figure, BoardError> {
        let idx = self.index_of(id).ok_or(BoardError::NotFound(id))?;
        self.selection.set_selected_id(Some(id));
        tracing::debug!("Selected figure {}", id);
        Ok(&self.figures[idx])
    }

    /// Selects the topmost figure covering `(x, y)`.
    pub fn select_at(&mut self, x: i32, y: i32) -> Result<&Figure, BoardError> {
        let id = self
            .selection
            .select_at(&self.figures, x, y)
            .ok_or(BoardError::NoShapeAt { x, y })?;
        tracing::debug!("Selected figure {} at ({}, {})", id, x, y);
        let idx = self.index_of(id).ok_or(BoardError::NotFound(id))?;
        Ok(&self.figures[idx])
    }

    /// Clears the selection, returning the id that was selected.
    pub fn deselect(&mut self) -> Option<u64> {
        self.selection.deselect()
    }

    /// Index of the selected figure, failing when nothing is selected.
    pub(crate) fn selected_index(&self) -> Result<usize, BoardError> {
        let id = self.selection.selected_id().ok_or(BoardError::NoSelection)?;
        self.index_of(id).ok_or(BoardError::NotFound(id))
    }
}
