//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0) for every piece
//!
//! # Gravity
//!
//! The gravity interval starts at [`BASE_GRAVITY_MS`] and shrinks by
//! [`GRAVITY_STEP_MS`] per level, never going below [`MIN_GRAVITY_MS`]:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 1000ms |
//! | 1 | 925ms |
//! | 4 | 700ms |
//! | 12+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use mctetris_types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(Cell::from(piece), Cell::T);
//!
//! assert_eq!(Rotation::from_index(5), Rotation::East);
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 0 (1000ms = 1 second per row)
pub const BASE_GRAVITY_MS: u32 = 1000;

/// Gravity speed-up per level
pub const GRAVITY_STEP_MS: u32 = 75;

/// Gravity never gets faster than this
pub const MIN_GRAVITY_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table, indexed by lines cleared (capped at 4).
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Integer offset or board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Component-wise sum, used to move local offsets into board space.
    pub const fn offset(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: White, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mctetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// Rotation states, indexed 0..=3 clockwise from the spawn orientation.
///
/// - **North** (0): Spawn orientation
/// - **East** (1): Rotated 90° clockwise
/// - **South** (2): Rotated 180°
/// - **West** (3): Rotated 270° clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Build a rotation from any index, normalized modulo 4.
    ///
    /// # Examples
    ///
    /// ```
    /// use mctetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(0), Rotation::North);
    /// assert_eq!(Rotation::from_index(3), Rotation::West);
    /// assert_eq!(Rotation::from_index(6), Rotation::South);
    /// ```
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Display category stored in each board position.
///
/// `Empty` is the cleared state; every other variant corresponds to exactly
/// one [`PieceKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// Piece kind that produced this cell, if any.
    pub fn piece_kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::I => Some(PieceKind::I),
            Cell::O => Some(PieceKind::O),
            Cell::T => Some(PieceKind::T),
            Cell::S => Some(PieceKind::S),
            Cell::Z => Some(PieceKind::Z),
            Cell::J => Some(PieceKind::J),
            Cell::L => Some(PieceKind::L),
        }
    }

    /// Compact code used by snapshots: 0 = empty, 1..=7 in kind order.
    pub fn code(&self) -> u8 {
        match self.piece_kind() {
            Some(kind) => kind.index() as u8 + 1,
            None => 0,
        }
    }

    /// Inverse of [`Cell::code`]; unknown codes decode to `Empty`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1..=7 => PieceKind::ALL[(code - 1) as usize].into(),
            _ => Cell::Empty,
        }
    }
}

impl From<PieceKind> for Cell {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Cell::I,
            PieceKind::O => Cell::O,
            PieceKind::T => Cell::T,
            PieceKind::S => Cell::S,
            PieceKind::Z => Cell::Z,
            PieceKind::J => Cell::J,
            PieceKind::L => Cell::L,
        }
    }
}

/// Discrete commands the shell feeds into the game.
///
/// `Pause` and `Quit` never reach the simulation; they are handled by the
/// caller's loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot fall
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Toggle pause state
    Pause,
    /// Leave the game
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_and_scoring_constants() {
        assert_eq!(BASE_GRAVITY_MS, 1000);
        assert_eq!(GRAVITY_STEP_MS, 75);
        assert_eq!(MIN_GRAVITY_MS, 100);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
    }

    #[test]
    fn cell_codes_match_kind_order() {
        assert_eq!(Cell::Empty.code(), 0);
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            let cell = Cell::from(*kind);
            assert_eq!(cell.code() as usize, i + 1);
            assert_eq!(Cell::from_code(cell.code()), cell);
            assert_eq!(cell.piece_kind(), Some(*kind));
        }
        assert_eq!(Cell::from_code(42), Cell::Empty);
    }

    #[test]
    fn rotation_cycles_clockwise() {
        let mut r = Rotation::North;
        for expected in [Rotation::East, Rotation::South, Rotation::West, Rotation::North] {
            r = r.rotate_cw();
            assert_eq!(r, expected);
        }
    }

    #[test]
    fn piece_kind_strings() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(PieceKind::from_str(&kind.as_str().to_uppercase()), Some(kind));
        }
    }

    #[test]
    fn point_offset() {
        assert_eq!(Point::new(3, 0).offset(Point::new(1, 2)), Point::new(4, 2));
    }
}
