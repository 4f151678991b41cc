//! Shared constants.

/// Default canvas width in cells.
pub const DEFAULT_BOARD_WIDTH: usize = 80;

/// Default canvas height in cells.
pub const DEFAULT_BOARD_HEIGHT: usize = 25;

/// Glyph of an unpainted cell.
pub const BLANK_GLYPH: char = ' ';

/// Version tag written into JSON design documents.
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Largest canvas, in cells, a configuration may request.
pub const MAX_BOARD_CELLS: usize = 1 << 20;
