//! Error handling for Blackboard
//!
//! Provides error types for every layer of the editor:
//! - Figure errors (invalid shape parameters)
//! - Board errors (placement validation, selection)
//! - Command errors (malformed command lines)
//! - Persistence errors (save/load)
//!
//! All error types use `thiserror`. The `Display` output of every variant is the
//! message shown to the user, so none of them are fatal to the command loop.

use thiserror::Error;

/// Figure error type
///
/// Raised when a shape parameter cannot describe a valid figure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FigureError {
    /// A dimension (radius, width, height, length) is zero or negative
    #[error("Invalid {name}: {value} (must be a positive integer)")]
    InvalidDimension {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A line direction is neither `H` nor `V`
    #[error("Invalid line direction '{0}' (expected H or V)")]
    InvalidDirection(String),

    /// Wrong number of shape parameters for the figure's kind
    #[error("Invalid number of parameters for {shape}: expected {expected}, got {found}")]
    ParameterCount {
        /// The shape kind name.
        shape: &'static str,
        /// Number of parameters the shape takes.
        expected: usize,
        /// Number of parameters supplied.
        found: usize,
    },

    /// A token that should be an integer is not one
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
}

/// Board error type
///
/// Represents validation failures of board operations. A failed operation
/// leaves the figure sequence untouched unless documented otherwise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The figure does not intersect the canvas
    #[error("Shape is out of board bounds or too big")]
    OutOfBounds,

    /// A structurally equal figure is already on the board
    #[error("Shape with the same parameters already exists at the same position")]
    Duplicate,

    /// No figure carries the requested id
    #[error("Shape with ID {0} not found")]
    NotFound(u64),

    /// The operation needs a selected figure
    #[error("No shape selected")]
    NoSelection,

    /// Hit-test found nothing at the given cell
    #[error("No shape found at ({x}, {y})")]
    NoShapeAt {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },

    /// The board holds no figures
    #[error("No shapes on the board")]
    EmptyBoard,

    /// Shape parameter error
    #[error(transparent)]
    Figure(#[from] FigureError),
}

/// Command error type
///
/// Represents parse errors of a single command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first token is not a known command
    #[error("Unknown command '{0}'. Type 'help' to see available commands")]
    UnknownCommand(String),

    /// Required arguments are missing
    #[error("Missing arguments for '{command}'. Usage: {usage}")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
        /// Usage line for the command.
        usage: &'static str,
    },

    /// More arguments than the command accepts
    #[error("Too many arguments for '{command}'. Usage: {usage}")]
    TooManyArguments {
        /// The command keyword.
        command: &'static str,
        /// Usage line for the command.
        usage: &'static str,
    },

    /// An argument could not be interpreted
    #[error("Invalid argument '{value}' for '{command}'")]
    InvalidArgument {
        /// The command keyword.
        command: &'static str,
        /// The offending token.
        value: String,
    },

    /// Unknown shape keyword in `add`
    #[error("Unknown shape '{0}' (expected circle, rectangle, line or triangle)")]
    UnknownShape(String),

    /// Unknown fill mode keyword in `add`
    #[error("Unknown fill mode '{0}' (expected fill or frame)")]
    UnknownFillMode(String),

    /// Shape parameter error
    #[error(transparent)]
    Figure(#[from] FigureError),
}

/// Persistence error type
///
/// Any of these aborts a load; the board is left empty afterwards.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record starts with an unrecognized shape keyword
    #[error("Line {line}: unknown shape keyword '{keyword}'")]
    UnknownKeyword {
        /// 1-based line number.
        line: usize,
        /// The keyword found.
        keyword: String,
    },

    /// A record has missing or unparsable fields
    #[error("Line {line}: malformed record: {reason}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A well-formed record the board refused to accept
    #[error("Line {line}: {source}")]
    Rejected {
        /// 1-based line number (record index for JSON documents).
        line: usize,
        /// The board's validation error.
        source: BoardError,
    },

    /// JSON document error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main error type for Blackboard
///
/// Unifies all error types so callers can propagate with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Figure error
    #[error(transparent)]
    Figure(#[from] FigureError),

    /// Board error
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Command error
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Blackboard operations
pub type Result<T> = std::result::Result<T, Error>;
