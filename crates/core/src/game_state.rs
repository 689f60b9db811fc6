//! Game state module - the falling-piece state machine
//!
//! Ties together the board, piece geometry and scoring. The caller chooses
//! each new kind and decides when gravity fires; this module only answers
//! whether a command was legal and keeps the counters.
//!
//! ```text
//!            spawn ok              lock
//! NoPiece ───────────▶ Falling ──────────▶ NoPiece
//!    │
//!    └── spawn blocked ──▶ GameOver (terminal)
//! ```
//!
//! Every operation either applies fully or leaves the state untouched.

use log::{debug, info};

use crate::board::Board;
use crate::pieces::{Piece, SPAWN_POSITION};
use crate::scoring::{calculate_line_score, gravity_delay_ms, level_for_lines};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind, Point};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    /// Board position of the piece's local (0, 0).
    pub origin: Point,
}

impl ActivePiece {
    /// Create a new piece in spawn orientation at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            piece: Piece::new(kind),
            origin: SPAWN_POSITION,
        }
    }

    /// Occupied cells in board coordinates.
    pub fn cells(&self) -> [Point; 4] {
        self.piece.blocks().map(|block| self.origin.offset(block))
    }
}

/// Complete game state for one session.
///
/// Restarting means building a new value; nothing here resets `game_over`.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
}

impl GameState {
    /// Create an empty game with no active piece
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Create a game over a pre-filled board.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            active: None,
            score: 0,
            level: 0,
            lines: 0,
            game_over: false,
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board cells of the active piece (for rendering)
    pub fn active_cells(&self) -> Option<[Point; 4]> {
        self.active.map(|a| a.cells())
    }

    /// Current gravity interval based on level
    pub fn gravity_delay_ms(&self) -> u32 {
        gravity_delay_ms(self.level)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.gravity_delay_ms = self.gravity_delay_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Put a new piece of `kind` at the spawn position.
    ///
    /// If the spawn footprint is blocked the game ends: any active piece is
    /// dropped and `game_over` latches. After that this always returns false.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        if self.game_over {
            return false;
        }

        let candidate = ActivePiece::spawn(kind);
        if !self.board.can_place(&candidate.piece, candidate.origin) {
            self.active = None;
            self.game_over = true;
            info!(
                "game over: {} blocked at spawn (score {}, lines {}, level {})",
                kind.as_str(),
                self.score,
                self.lines,
                self.level
            );
            return false;
        }

        self.active = Some(candidate);
        true
    }

    /// Try to move the active piece
    ///
    /// Returns false, leaving everything as it was, when there is no piece or
    /// the shifted position collides.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let (Some(x), Some(y)) = (
            active.origin.x.checked_add(dx),
            active.origin.y.checked_add(dy),
        ) else {
            return false;
        };
        let origin = Point::new(x, y);

        if !self.board.can_place(&active.piece, origin) {
            return false;
        }

        self.active = Some(ActivePiece { origin, ..active });
        true
    }

    /// Try to rotate the active piece clockwise in place.
    ///
    /// Only the current origin is tried; a blocked rotation is rejected.
    pub fn try_rotate_cw(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let piece = active.piece.rotated_cw();
        if !self.board.can_place(&piece, active.origin) {
            return false;
        }

        self.active = Some(ActivePiece { piece, ..active });
        true
    }

    /// Drop one row, or lock if the piece cannot fall.
    ///
    /// Returns true when the piece moved.
    pub fn soft_drop(&mut self) -> bool {
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Hard drop the active piece to the bottom and lock it
    pub fn hard_drop(&mut self) {
        if self.active.is_none() {
            return;
        }
        while self.try_move(0, 1) {}
        self.lock_piece();
    }

    /// One automatic fall step.
    pub fn tick_gravity(&mut self) {
        if self.active.is_none() || self.game_over {
            return;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
    }

    /// Lock the active piece onto the board and handle line clears
    pub(crate) fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.place(&active.piece, active.origin);

        let cleared = self.board.clear_full_lines();
        debug!(
            "locked {} at ({}, {}) rotation {}, cleared {}",
            active.piece.kind.as_str(),
            active.origin.x,
            active.origin.y,
            active.piece.rotation.index(),
            cleared
        );
        if cleared == 0 {
            return;
        }

        let gained = calculate_line_score(cleared, self.level);
        self.score = self.score.saturating_add(gained);
        self.lines = self.lines.saturating_add(cleared as u32);

        let previous_level = self.level;
        self.level = level_for_lines(self.lines);
        if self.level != previous_level {
            info!(
                "level {} reached at {} lines, gravity {}ms",
                self.level,
                self.lines,
                self.gravity_delay_ms()
            );
        }
    }

    /// Apply a game action
    ///
    /// `Pause` and `Quit` belong to the caller's loop and are ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                let had_piece = self.active.is_some();
                self.hard_drop();
                had_piece
            }
            GameAction::RotateCw => self.try_rotate_cw(),
            GameAction::Pause | GameAction::Quit => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

    fn board_with_rows(rows: std::ops::RangeInclusive<i8>, missing_x: i8) -> Board {
        let mut board = Board::new();
        for y in rows {
            for x in 0..BOARD_WIDTH as i8 {
                if x != missing_x {
                    board.set(x, y, Cell::Z);
                }
            }
        }
        board
    }

    /// Spawn an I, stand it up and slide it to column 9.
    fn vertical_i_at_right_wall(state: &mut GameState) {
        assert!(state.spawn(PieceKind::I));
        assert!(state.try_rotate_cw());
        for _ in 0..4 {
            assert!(state.try_move(1, 0));
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new();

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 0);
        assert_eq!(state.lines, 0);
        assert!(state.active.is_none());
        assert_eq!(state.gravity_delay_ms(), 1000);
    }

    #[test]
    fn test_spawn_piece() {
        let mut state = GameState::new();
        assert!(state.spawn(PieceKind::T));

        let active = state.active.unwrap();
        assert_eq!(active.piece.kind, PieceKind::T);
        assert_eq!(active.piece.rotation, Rotation::North);
        assert_eq!(active.origin, Point::new(3, 0));
        assert!(!state.game_over);
    }

    #[test]
    fn test_spawn_blocked_ends_game() {
        let mut board = Board::new();
        board.set(4, 0, Cell::J);
        let mut state = GameState::with_board(board);

        assert!(!state.spawn(PieceKind::T));
        assert!(state.game_over);
        assert!(state.active.is_none());

        // Latched: even a kind that would fit is refused.
        assert!(!state.spawn(PieceKind::I));
        assert!(state.game_over);
    }

    #[test]
    fn test_try_move() {
        let mut state = GameState::new();
        state.spawn(PieceKind::T);

        assert!(state.try_move(1, 0));
        assert_eq!(state.active.unwrap().origin.x, 4);

        assert!(state.try_move(-1, 0));
        assert_eq!(state.active.unwrap().origin.x, 3);

        // Can't move up through the ceiling
        assert!(!state.try_move(0, -1));
        assert_eq!(state.active.unwrap().origin, Point::new(3, 0));
    }

    #[test]
    fn test_try_move_without_piece() {
        let mut state = GameState::new();
        assert!(!state.try_move(1, 0));
        assert!(!state.try_rotate_cw());
        assert!(!state.soft_drop());
        state.hard_drop();
        state.tick_gravity();
        assert!(state.board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_try_move_overflow_rejected() {
        let mut state = GameState::new();
        state.spawn(PieceKind::O);
        assert!(!state.try_move(i8::MAX, 0));
        assert!(!state.try_move(0, i8::MIN));
        assert_eq!(state.active.unwrap().origin, SPAWN_POSITION);
    }

    #[test]
    fn test_wall_stops_movement() {
        let mut state = GameState::new();
        state.spawn(PieceKind::T);

        // T north spans local x 0..=2, so x=0 is the left limit.
        for _ in 0..3 {
            assert!(state.try_move(-1, 0));
        }
        for _ in 0..5 {
            assert!(!state.try_move(-1, 0));
            assert_eq!(state.active.unwrap().origin.x, 0);
        }
    }

    #[test]
    fn test_rotate_has_no_kicks() {
        let mut state = GameState::new();
        state.spawn(PieceKind::I);
        assert!(state.try_rotate_cw());
        // East I sits in local column 2; slide it against the left wall
        // (origin x = -2) and rotating back to a horizontal state would need
        // columns -2..=1.
        while state.try_move(-1, 0) {}
        assert_eq!(state.active.unwrap().origin.x, -2);
        assert!(!state.try_rotate_cw());
        assert_eq!(state.active.unwrap().piece.rotation, Rotation::East);
    }

    #[test]
    fn test_rotate_blocked_by_stack() {
        let mut board = Board::new();
        // T east needs (4, 2) at spawn.
        board.set(4, 2, Cell::O);
        let mut state = GameState::with_board(board);
        state.spawn(PieceKind::T);
        assert!(!state.try_rotate_cw());
        assert_eq!(state.active.unwrap().piece.rotation, Rotation::North);
    }

    #[test]
    fn test_four_rotations_restore_cells() {
        for kind in PieceKind::ALL {
            let mut state = GameState::new();
            state.spawn(kind);
            state.try_move(0, 5);
            let before = state.active_cells().unwrap();
            for _ in 0..4 {
                assert!(state.try_rotate_cw());
            }
            assert_eq!(state.active_cells().unwrap(), before);
        }
    }

    #[test]
    fn test_soft_drop_locks_on_floor() {
        let mut state = GameState::new();
        state.spawn(PieceKind::O);

        let mut falls = 0;
        while state.soft_drop() {
            falls += 1;
        }
        // O occupies local rows 0..=1, so it falls from y=0 to y=18.
        assert_eq!(falls, 18);
        assert!(state.active.is_none());
        assert_eq!(state.board.get(4, 19), Some(Cell::O));
        assert_eq!(state.board.get(5, 18), Some(Cell::O));
    }

    #[test]
    fn test_hard_drop() {
        let mut state = GameState::new();
        state.spawn(PieceKind::T);
        state.hard_drop();

        assert!(state.active.is_none());
        assert_eq!(state.score, 0);
        assert_eq!(state.board.get(4, 18), Some(Cell::T));
        assert_eq!(state.board.get(3, 19), Some(Cell::T));
        assert_eq!(state.board.get(4, 19), Some(Cell::T));
        assert_eq!(state.board.get(5, 19), Some(Cell::T));
    }

    #[test]
    fn test_tick_gravity() {
        let mut state = GameState::new();
        state.spawn(PieceKind::S);

        state.tick_gravity();
        assert_eq!(state.active.unwrap().origin.y, 1);

        // S north occupies local rows 0..=1; rest at y=18 then lock.
        for _ in 0..17 {
            state.tick_gravity();
        }
        assert_eq!(state.active.unwrap().origin.y, 18);
        state.tick_gravity();
        assert!(state.active.is_none());
    }

    #[test]
    fn test_lock_piece_clears_lines() {
        let mut state = GameState::with_board(board_with_rows(19..=19, 9));
        vertical_i_at_right_wall(&mut state);
        state.hard_drop();

        assert_eq!(state.lines, 1);
        assert_eq!(state.score, 100);
        assert_eq!(state.level, 0);
        // Remaining three I cells shift down one row.
        assert_eq!(state.board.get(9, 19), Some(Cell::I));
        assert_eq!(state.board.get(9, 17), Some(Cell::I));
        assert_eq!(state.board.get(9, 16), Some(Cell::Empty));
        assert_eq!(state.board.get(0, 19), Some(Cell::Empty));
    }

    #[test]
    fn test_four_line_clear() {
        let mut state = GameState::with_board(board_with_rows(16..=19, 9));
        vertical_i_at_right_wall(&mut state);
        state.hard_drop();

        assert_eq!(state.lines, 4);
        assert_eq!(state.score, 800);
        assert!(state.board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_level_progression() {
        let mut state = GameState::with_board(board_with_rows(10..=19, 9));

        for _ in 0..3 {
            vertical_i_at_right_wall(&mut state);
            state.hard_drop();
        }

        assert_eq!(state.lines, 10);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 800 + 800 + 300);
        assert_eq!(state.gravity_delay_ms(), 925);
    }

    #[test]
    fn test_score_uses_level_before_clear() {
        let mut state = GameState::with_board(board_with_rows(10..=19, 9));
        state.lines = 9;
        state.level = 0;

        vertical_i_at_right_wall(&mut state);
        state.hard_drop();

        // 4 lines at level 0, then level becomes 13 / 10 = 1.
        assert_eq!(state.score, 800);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_game_over_detection() {
        let mut state = GameState::new();

        let mut spawned = 0;
        while state.spawn(PieceKind::O) {
            spawned += 1;
            state.hard_drop();
        }

        assert_eq!(spawned, BOARD_HEIGHT as usize / 2);
        assert!(state.game_over);
        assert!(state.active.is_none());

        let before = state.board.clone();
        assert!(!state.try_move(1, 0));
        state.tick_gravity();
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_apply_action() {
        let mut state = GameState::new();
        state.spawn(PieceKind::L);

        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active.unwrap().origin.x, 2);
        assert!(state.apply_action(GameAction::MoveRight));
        assert!(state.apply_action(GameAction::RotateCw));
        assert_eq!(state.active.unwrap().piece.rotation, Rotation::East);
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active.unwrap().origin.y, 1);

        let before = state.active;
        assert!(!state.apply_action(GameAction::Pause));
        assert!(!state.apply_action(GameAction::Quit));
        assert_eq!(state.active, before);

        assert!(state.apply_action(GameAction::HardDrop));
        assert!(state.active.is_none());
        assert!(!state.apply_action(GameAction::HardDrop));
    }

    #[test]
    fn test_snapshot() {
        let mut state = GameState::with_board(board_with_rows(19..=19, 9));
        state.spawn(PieceKind::J);

        let snap = state.snapshot();
        assert_eq!(snap.board[19][0], Cell::Z.code());
        assert_eq!(snap.board[19][9], 0);
        let active = snap.active.unwrap();
        assert_eq!(active.kind, PieceKind::J);
        assert_eq!((active.x, active.y), (3, 0));
        assert_eq!(snap.gravity_delay_ms, 1000);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_active_cells() {
        let mut state = GameState::new();
        assert!(state.active_cells().is_none());
        state.spawn(PieceKind::I);
        assert_eq!(
            state.active_cells().unwrap(),
            [
                Point::new(3, 1),
                Point::new(4, 1),
                Point::new(5, 1),
                Point::new(6, 1)
            ]
        );
    }
}
