//! # Blackboard Core
//!
//! Core types and the error taxonomy shared by every Blackboard crate.

pub mod constants;
pub mod error;
pub mod types;

pub use constants::{
    BLANK_GLYPH, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, FILE_FORMAT_VERSION, MAX_BOARD_CELLS,
};
pub use error::{BoardError, CommandError, Error, FigureError, PersistenceError, Result};
pub use types::{CellBounds, Position};
