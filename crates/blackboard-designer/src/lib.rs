//! # Blackboard Designer
//!
//! Figure model and board entity manager for the Blackboard ASCII editor.
//!
//! ## Core Components
//!
//! - **Figures**: circles, rectangles, lines and triangles with a position,
//!   a color (its first letter is the glyph) and a fill mode
//! - **Canvas**: fixed-size grid of glyphs
//! - **Board**: ordered figure registry, id allocator and selection cursor;
//!   validates every mutation and keeps the canvas in sync
//! - **Commands**: the line-oriented command grammar
//! - **Serialization**: text and JSON design files
//!
//! ## Architecture
//!
//! ```text
//! Board
//!   ├── Figures (draw order = z-order)
//!   │     └── Shape (Circle | Rectangle | Line | Triangle)
//!   ├── Canvas (glyph grid, owned exclusively)
//!   └── SelectionManager (single cursor)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use blackboard_designer::{Board, Circle, Figure, FillMode, Position};
//!
//! let mut board = Board::new(80, 25);
//! let circle = Circle::new(3).unwrap();
//! let id = board
//!     .add_figure(Figure::new(circle, Position::new(10, 10), "red", FillMode::Fill))
//!     .unwrap();
//! assert_eq!(id, 1);
//! assert_eq!(board.glyph_at(10, 10), Some('r'));
//! ```

pub mod board;
pub mod canvas;
pub mod commands;
pub mod figure;
pub mod model;
pub mod selection_manager;
pub mod serialization;

pub use blackboard_core::{BoardError, CommandError, FigureError, PersistenceError, Position};
pub use board::Board;
pub use canvas::Canvas;
pub use commands::{BoardCommand, HELP_TEXT};
pub use figure::Figure;
pub use model::{
    Circle, Direction, FillMode, GlyphShape, Line, Rectangle, Shape, ShapeType, Triangle,
};
pub use selection_manager::SelectionManager;
pub use serialization::{DesignFile, FileFormat};
