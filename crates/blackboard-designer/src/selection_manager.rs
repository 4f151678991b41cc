use crate::figure::Figure;

/// Tracks the single selected figure.
///
/// # Selection Model
///
/// - At most one figure is selected, referenced by id (`None` is the sentinel).
/// - Point selection scans the figures topmost first, matching the
///   last-write-wins order of rasterization.
///
/// The manager never owns figures. The board clears it whenever the selected
/// figure leaves the sequence.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The ID of the selected figure, if any
    selected_id: Option<u64>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use blackboard_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected figure.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Sets the selected figure ID, or `None` to clear.
    ///
    /// The caller is responsible for passing an id that exists on the board.
    pub fn set_selected_id(&mut self, id: Option<u64>) {
        self.selected_id = id;
    }

    /// Clears the selection, returning the previously selected id.
    pub fn deselect(&mut self) -> Option<u64> {
        self.selected_id.take()
    }

    /// Clears the selection if it references `id`.
    pub fn forget(&mut self, id: u64) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }

    /// Finds the topmost figure covering `(x, y)`.
    ///
    /// `figures` must be in draw order; the scan runs back to front so the
    /// most recently painted figure wins on overlap. The selection itself is
    /// left untouched when nothing is hit.
    ///
    /// # Returns
    ///
    /// The ID of the newly selected figure, or `None` if no figure covers the cell.
    pub fn select_at(&mut self, figures: &[Figure], x: i32, y: i32) -> Option<u64> {
        let found = figures
            .iter()
            .rev()
            .find(|fig| fig.contains_point(x, y))
            .map(Figure::id);

        if found.is_some() {
            self.selected_id = found;
        }
        found
    }
}
