//! Integration tests for the game state machine, driven only through the
//! public API the app uses.

use mctetris::core::{Board, GameState, PieceQueue};
use mctetris::types::{Cell, GameAction, PieceKind, Point, BOARD_WIDTH};

/// Lay a horizontal I flat on the floor with its left end at column `left`.
fn drop_flat_i(state: &mut GameState, left: i8) {
    assert!(state.spawn(PieceKind::I));
    // Spawn origin x is 3 and the north I starts at frame column 0.
    let dx = left - 3;
    for _ in 0..dx.abs() {
        assert!(state.try_move(dx.signum(), 0));
    }
    state.hard_drop();
}

/// Stand an I upright in `column` (east rotation occupies frame column 2).
fn drop_upright_i(state: &mut GameState, column: i8) {
    assert!(state.spawn(PieceKind::I));
    assert!(state.try_rotate_cw());
    let dx = column - 5;
    for _ in 0..dx.abs() {
        assert!(state.try_move(dx.signum(), 0));
    }
    state.hard_drop();
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new();
    assert!(state.active().is_none());
    assert!(!state.game_over());
    assert_eq!((state.score(), state.level(), state.lines()), (0, 0, 0));

    assert!(state.spawn(PieceKind::T));
    let active = state.active().unwrap();
    assert_eq!(active.origin, Point::new(3, 0));
    assert_eq!(active.piece.kind, PieceKind::T);
}

#[test]
fn test_hard_drop_t_on_empty_board() {
    let mut state = GameState::new();
    state.spawn(PieceKind::T);
    state.hard_drop();

    assert!(state.active().is_none());
    assert_eq!(state.score(), 0);
    let board = state.board();
    for (x, y) in [(4, 18), (3, 19), (4, 19), (5, 19)] {
        assert_eq!(board.get(x, y), Some(Cell::T));
    }
    assert_eq!(board.cells().iter().filter(|c| !c.is_empty()).count(), 4);
}

#[test]
fn test_wall_stops_movement() {
    let mut state = GameState::new();
    state.spawn(PieceKind::O);

    let mut moves = 0;
    while state.try_move(-1, 0) {
        moves += 1;
    }
    // O's left column is frame column 1, so origin x stops at -1.
    assert_eq!(moves, 4);
    let origin = state.active().unwrap().origin;
    assert!(!state.try_move(-1, 0));
    assert_eq!(state.active().unwrap().origin, origin);
}

#[test]
fn test_single_line_clear() {
    let mut state = GameState::new();
    drop_flat_i(&mut state, 0);
    drop_flat_i(&mut state, 4);
    drop_upright_i(&mut state, 8);
    assert_eq!(state.lines(), 0);

    drop_upright_i(&mut state, 9);
    assert_eq!(state.lines(), 1);
    assert_eq!(state.score(), 100);

    // The uprights' upper three cells slid down one row.
    let board = state.board();
    assert_eq!(board.get(8, 19), Some(Cell::I));
    assert_eq!(board.get(9, 17), Some(Cell::I));
    assert_eq!(board.get(8, 16), Some(Cell::Empty));
    assert_eq!(board.get(0, 19), Some(Cell::Empty));
}

#[test]
fn test_level_up_after_ten_lines() {
    let mut board = Board::new();
    // Ten nearly-full rows (10..=19) with a hole at column 0.
    for y in 10..20 {
        for x in 1..BOARD_WIDTH as i8 {
            board.set(x, y, Cell::Z);
        }
    }
    let mut state = GameState::with_board(board);

    // Each upright I in column 0 clears rows 16..=19; the stack compacts
    // down, so the next I clears rows 16..=19 again.
    for remaining in [6, 2] {
        drop_upright_i(&mut state, 0);
        assert!(state.board().is_occupied(1, 19));
        assert!(!state.board().is_occupied(0, 19));
        assert!(!state.board().is_occupied(1, 19 - remaining));
        assert!(state.board().is_occupied(1, 20 - remaining));
    }
    assert_eq!(state.lines(), 8);
    assert_eq!(state.score(), 1600);
    assert_eq!(state.level(), 0);
    assert_eq!(state.gravity_delay_ms(), 1000);

    // Last two rows: an upright I clears both.
    drop_upright_i(&mut state, 0);
    assert_eq!(state.lines(), 10);
    assert_eq!(state.level(), 1);
    assert_eq!(state.score(), 1600 + 300);
    assert_eq!(state.gravity_delay_ms(), 925);
}

#[test]
fn test_game_over_after_stacking() {
    let mut state = GameState::new();
    let mut spawned = 0;
    while state.spawn(PieceKind::O) {
        state.hard_drop();
        spawned += 1;
        assert!(spawned <= 10);
    }
    assert_eq!(spawned, 10);
    assert!(state.game_over());
    assert!(state.active().is_none());

    // Everything is a no-op from here.
    let before = state.snapshot();
    assert!(!state.try_move(1, 0));
    assert!(!state.try_rotate_cw());
    state.tick_gravity();
    state.hard_drop();
    assert!(!state.spawn(PieceKind::I));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_apply_action_routes_to_operations() {
    let mut state = GameState::new();
    state.spawn(PieceKind::L);

    assert!(state.apply_action(GameAction::MoveRight));
    assert!(state.apply_action(GameAction::RotateCw));
    assert!(state.apply_action(GameAction::SoftDrop));
    assert!(!state.apply_action(GameAction::Pause));
    assert!(!state.apply_action(GameAction::Quit));
    assert!(state.apply_action(GameAction::HardDrop));
    assert!(state.active().is_none());
    assert!(!state.apply_action(GameAction::HardDrop));
}

#[test]
fn test_seeded_games_are_reproducible() {
    fn play(seed: u32) -> (u32, u32, [[u8; 10]; 20]) {
        let mut queue = PieceQueue::new(seed);
        let mut state = GameState::new();
        let mut step = 0i32;
        while state.spawn(queue.draw()) && step < 500 {
            for _ in 0..(step % 5) {
                state.try_move(if step % 2 == 0 { -1 } else { 1 }, 0);
            }
            if step % 3 == 0 {
                state.try_rotate_cw();
            }
            state.hard_drop();
            step += 1;
        }
        let snap = state.snapshot();
        (snap.score, snap.lines, snap.board)
    }

    assert_eq!(play(2024), play(2024));
}
