//! Player module - the active falling piece
//!
//! A player is created at game start and after every lock-in, and is
//! replaced the instant it locks. Its shape matrix mutates as the piece
//! rotates; the canonical shape constants in `pieces` never change.

use crate::core::pieces::{shape_of, Shape};
use crate::types::{PieceKind, Rgb, SPAWN_X, SPAWN_Y};

/// Active falling piece: a shape matrix plus its top-left board offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Player {
    /// Create a player at the spawn position with the canonical shape.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Iterate the occupied cells in absolute board coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape.cells().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_at_fixed_position() {
        let player = Player::spawn(PieceKind::T);
        assert_eq!((player.x, player.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(player.shape, shape_of(PieceKind::T));
    }

    #[test]
    fn cells_are_offset_by_position() {
        let player = Player::spawn(PieceKind::O);
        let cells: Vec<_> = player.cells().collect();
        assert_eq!(
            cells,
            vec![
                (SPAWN_X, SPAWN_Y),
                (SPAWN_X + 1, SPAWN_Y),
                (SPAWN_X, SPAWN_Y + 1),
                (SPAWN_X + 1, SPAWN_Y + 1)
            ]
        );
    }
}
