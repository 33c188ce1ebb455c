//! Terminal presentation layer.
//!
//! `GameView` turns snapshots into frames (pure), `TerminalScreen` flushes
//! frames to the terminal (all the I/O lives here).

pub mod frame;
pub mod game_view;
pub mod screen;

pub use frame::{Frame, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use screen::TerminalScreen;
