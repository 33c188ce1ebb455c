//! Input module - terminal key events to game actions.

pub mod map;
pub mod repeat;

pub use map::{map_key_event, should_quit};
pub use repeat::KeyRepeat;
