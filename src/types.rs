//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn position for new pieces (top-left of the shape matrix)
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 0;

/// UI tick granularity (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity speed curve: `BASE_DROP_MS / (level + 1) + LEVEL_BONUS_MS`
pub const BASE_DROP_MS: u32 = 1000;
pub const LEVEL_BONUS_MS: u32 = 200;

/// A level is gained once `rows_cleared > (level + 1) * LINES_PER_LEVEL`
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring, single through tetris (classic Nintendo table)
pub const LINE_POINTS: [u32; 4] = [40, 100, 300, 1200];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven kinds, in draw order for the uniform generator.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Fixed display color for this kind.
    pub const fn color(self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(80, 227, 230),
            PieceKind::J => Rgb::new(36, 95, 223),
            PieceKind::L => Rgb::new(223, 173, 36),
            PieceKind::O => Rgb::new(223, 217, 36),
            PieceKind::S => Rgb::new(48, 211, 56),
            PieceKind::T => Rgb::new(132, 61, 198),
            PieceKind::Z => Rgb::new(227, 78, 78),
        }
    }

}

/// Rotation direction for the matrix rotation in `core::pieces`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDir {
    Clockwise,
    CounterClockwise,
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    RotateCw,
    SoftDrop,
    TogglePause,
    NewGame,
}

/// Cell on the board (None = empty, Some = merged with piece kind)
pub type Cell = Option<PieceKind>;

/// Occupancy status of a snapshot cell.
///
/// `Clear` covers both empty cells and cells transiently occupied by the
/// falling piece; `Merged` means permanently locked into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    #[default]
    Clear,
    Merged,
}
