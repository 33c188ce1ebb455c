//! Pieces module - tetromino shape matrices and computed rotation
//!
//! Each shape is a square bitmap matrix (I is 4x4, O is 2x2, the rest 3x3,
//! some padded with zero rows/columns). Rotations are computed from the
//! matrix, not looked up: transpose, then reverse each row (clockwise) or
//! reverse the row order (counterclockwise).

use crate::core::rng::SimpleRng;
use crate::types::{PieceKind, RotationDir};

/// Largest shape matrix dimension (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square bitmap matrix for one tetromino orientation.
///
/// The matrix is stored in a fixed 4x4 grid; only the leading
/// `size` x `size` block is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: u8,
    grid: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let mut grid = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < N {
            let mut x = 0;
            while x < N {
                grid[y][x] = rows[y][x];
                x += 1;
            }
            y += 1;
        }
        Self { size: N as u8, grid }
    }

    /// Matrix dimension (width == height).
    pub fn size(&self) -> i8 {
        self.size as i8
    }

    /// Whether the matrix cell at (x, y) is occupied.
    pub fn filled(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.grid[y][x] != 0
    }

    /// Iterate the occupied (x, y) offsets within the matrix.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let size = self.size as usize;
        (0..size).flat_map(move |y| {
            (0..size).filter_map(move |x| {
                if self.grid[y][x] != 0 {
                    Some((x as i8, y as i8))
                } else {
                    None
                }
            })
        })
    }

    /// Rotate the matrix a quarter turn.
    pub fn rotated(&self, dir: RotationDir) -> Shape {
        let size = self.size as usize;
        let mut grid = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

        for y in 0..size {
            for x in 0..size {
                grid[y][x] = match dir {
                    // Transpose, then reverse each row.
                    RotationDir::Clockwise => self.grid[size - 1 - x][y],
                    // Transpose, then reverse the row order.
                    RotationDir::CounterClockwise => self.grid[x][size - 1 - y],
                };
            }
        }

        Shape {
            size: self.size,
            grid,
        }
    }
}

const I_SHAPE: Shape = Shape::from_rows([
    [0, 0, 0, 0], //
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const J_SHAPE: Shape = Shape::from_rows([
    [0, 1, 0], //
    [0, 1, 0],
    [1, 1, 0],
]);

const L_SHAPE: Shape = Shape::from_rows([
    [0, 1, 0], //
    [0, 1, 0],
    [0, 1, 1],
]);

const O_SHAPE: Shape = Shape::from_rows([
    [1, 1], //
    [1, 1],
]);

const S_SHAPE: Shape = Shape::from_rows([
    [0, 1, 1], //
    [1, 1, 0],
    [0, 0, 0],
]);

const T_SHAPE: Shape = Shape::from_rows([
    [0, 1, 0], //
    [1, 1, 1],
    [0, 0, 0],
]);

const Z_SHAPE: Shape = Shape::from_rows([
    [1, 1, 0], //
    [0, 1, 1],
    [0, 0, 0],
]);

/// Canonical (spawn) shape matrix for a piece kind.
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Draw the next piece kind, uniformly at random among the 7 shapes.
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(shape_of(kind).cells().count(), 4, "kind {:?}", kind);
        }
    }

    #[test]
    fn i_shape_occupies_second_row() {
        let cells: Vec<_> = I_SHAPE.cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let original = shape_of(kind);

            let mut cw = original;
            let mut ccw = original;
            for _ in 0..4 {
                cw = cw.rotated(RotationDir::Clockwise);
                ccw = ccw.rotated(RotationDir::CounterClockwise);
            }

            assert_eq!(cw, original, "4x clockwise should return {:?}", kind);
            assert_eq!(ccw, original, "4x counterclockwise should return {:?}", kind);
        }
    }

    #[test]
    fn clockwise_then_counterclockwise_is_identity() {
        for kind in PieceKind::ALL {
            let original = shape_of(kind);
            let back = original
                .rotated(RotationDir::Clockwise)
                .rotated(RotationDir::CounterClockwise);
            assert_eq!(back, original);
        }
    }

    #[test]
    fn o_shape_is_rotation_invariant() {
        assert_eq!(O_SHAPE.rotated(RotationDir::Clockwise), O_SHAPE);
        assert_eq!(O_SHAPE.rotated(RotationDir::CounterClockwise), O_SHAPE);
    }

    #[test]
    fn random_kind_covers_all_kinds() {
        let mut rng = SimpleRng::new(42);
        let mut counts = [0u32; 7];

        for _ in 0..700 {
            let kind = random_kind(&mut rng);
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[idx] += 1;
        }

        for (kind, count) in PieceKind::ALL.iter().zip(counts) {
            assert!(count > 0, "kind {:?} never drawn", kind);
        }
    }
}
