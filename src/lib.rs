//! Classic-rules terminal Tetris.
//!
//! The game engine (`core`) is a pure state-transition module driven by a
//! fixed-interval drop tick and discrete player inputs. The terminal layer
//! (`term`), key handling (`input`), and best-score persistence (`store`)
//! are collaborators around it; the engine itself does no I/O.

pub mod core;
pub mod input;
pub mod store;
pub mod term;
pub mod types;
