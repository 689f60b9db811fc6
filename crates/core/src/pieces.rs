//! Pieces module - tetromino geometry tables
//!
//! Every kind has four orientations laid out in a 4x4 local frame, following
//! the usual SRS spawn layout. Rotation is a plain table lookup: there are no
//! wall kicks, so a rotation either fits at the same origin or is rejected.

use crate::types::{Cell, PieceKind, Point, Rotation};

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [Point; 4];

/// All four orientations of one kind, indexed by [`Rotation::index`].
pub type RotationTable = [PieceShape; 4];

/// Spawn position for new pieces (x, y)
pub const SPAWN_POSITION: Point = Point::new(3, 0);

const fn p(x: i8, y: i8) -> Point {
    Point::new(x, y)
}

const I_SHAPES: RotationTable = [
    // N: horizontal, centered on row 1
    [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
    // E: vertical, right-aligned
    [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
    // S: horizontal, centered on row 2
    [p(0, 2), p(1, 2), p(2, 2), p(3, 2)],
    // W: vertical, left-aligned
    [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
];

// O occupies the same cells in every orientation.
const O_SHAPES: RotationTable = [[p(1, 0), p(2, 0), p(1, 1), p(2, 1)]; 4];

const T_SHAPES: RotationTable = [
    [p(1, 0), p(0, 1), p(1, 1), p(2, 1)],
    [p(1, 0), p(1, 1), p(2, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(1, 2)],
    [p(1, 0), p(0, 1), p(1, 1), p(1, 2)],
];

const S_SHAPES: RotationTable = [
    [p(1, 0), p(2, 0), p(0, 1), p(1, 1)],
    [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
    [p(1, 1), p(2, 1), p(0, 2), p(1, 2)],
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
];

const Z_SHAPES: RotationTable = [
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
    [p(2, 0), p(1, 1), p(2, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 2)],
    [p(1, 0), p(0, 1), p(1, 1), p(0, 2)],
];

const J_SHAPES: RotationTable = [
    [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
    [p(1, 0), p(2, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
    [p(1, 0), p(1, 1), p(0, 2), p(1, 2)],
];

const L_SHAPES: RotationTable = [
    [p(2, 0), p(0, 1), p(1, 1), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(0, 2)],
    [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
];

/// Rotation table for a piece kind.
pub fn shape_for(kind: PieceKind) -> &'static RotationTable {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    }
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    shape_for(kind)[rotation.index()]
}

/// Display category written into the board for a kind.
pub fn cell_category(kind: PieceKind) -> Cell {
    Cell::from(kind)
}

/// A piece kind in one of its four orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
}

impl Piece {
    /// Piece in spawn orientation.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
        }
    }

    /// Piece with an arbitrary rotation index (taken modulo 4).
    pub fn with_rotation(kind: PieceKind, rotation_index: usize) -> Self {
        Self {
            kind,
            rotation: Rotation::from_index(rotation_index),
        }
    }

    /// Occupied cells in the local 4x4 frame.
    pub fn blocks(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    pub fn cell(&self) -> Cell {
        cell_category(self.kind)
    }

    /// The same piece turned 90° clockwise.
    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}
