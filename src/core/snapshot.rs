//! Snapshot module - the read-only state the presentation layer renders
//!
//! The engine owns all mutable state; renderers receive a snapshot with the
//! falling piece already composed into the grid. Snapshot cells carry the
//! (value, status, color) triple: value is `kind.is_some()`, the color is a
//! fixed function of the kind, and the status separates the transient
//! falling piece (`Clear`) from locked cells (`Merged`).

use crate::types::{CellStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// One rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapshotCell {
    pub kind: Option<PieceKind>,
    pub status: CellStatus,
}

impl SnapshotCell {
    pub fn is_occupied(&self) -> bool {
        self.kind.is_some()
    }
}

/// Complete render state produced on each tick/input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Row-major grid, `grid[y][x]`.
    pub grid: [[SnapshotCell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub score: u32,
    pub best_score: u32,
    pub level: u32,
    pub rows_cleared: u32,
    pub paused: bool,
    pub game_over: bool,
    pub started: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[SnapshotCell::default(); BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            score: 0,
            best_score: 0,
            level: 0,
            rows_cleared: 0,
            paused: false,
            game_over: false,
            started: false,
        }
    }
}
