use crate::game_state::ActivePiece;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, BASE_GRAVITY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.piece.kind,
            rotation: value.piece.rotation,
            x: value.origin.x,
            y: value.origin.y,
        }
    }
}

/// Read-only per-frame view of a game, copied out without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Cell codes, `[y][x]` (see `Cell::code`).
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
    pub gravity_delay_ms: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            level: 0,
            lines: 0,
            game_over: false,
            gravity_delay_ms: BASE_GRAVITY_MS,
        }
    }
}
