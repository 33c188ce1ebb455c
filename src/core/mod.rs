//! Core module - pure game logic with no external dependencies
//!
//! Board, pieces, collision, scoring, and the session state machine.
//! It has zero dependencies on UI, persistence, or I/O.

pub mod board;
pub mod game;
pub mod pieces;
pub mod player;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use board::Board;
pub use game::GameSession;
pub use pieces::{random_kind, shape_of, Shape};
pub use player::Player;
pub use rng::{seed_from_time, SimpleRng};
pub use snapshot::{GameSnapshot, SnapshotCell};
