//! # Blackboard
//!
//! An interactive ASCII drawing board. Figures (circles, rectangles, lines and
//! triangles) are placed, selected, moved, recolored and resized on a fixed
//! character canvas which is printed as text.
//!
//! ## Architecture
//!
//! Blackboard is organized as a workspace with multiple crates:
//!
//! 1. **blackboard-core** - Error taxonomy, constants, grid coordinates
//! 2. **blackboard-designer** - Figures, canvas, board, command grammar, design files
//! 3. **blackboard-settings** - Configuration files and validation
//! 4. **blackboard** - Command interpreter and the binary

pub mod interpreter;

pub use blackboard_core::{BoardError, CommandError, Error, FigureError, PersistenceError, Result};
pub use blackboard_designer::{
    Board, BoardCommand, Circle, Direction, Figure, FillMode, Line, Position, Rectangle, Shape,
    ShapeType, Triangle,
};
pub use blackboard_settings::{Config, SettingsError};
pub use interpreter::{Flow, Interpreter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so the canvas on stdout stays clean
/// - RUST_LOG environment variable support, falling back to `default_level`
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
