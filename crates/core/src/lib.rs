//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI, terminals, clocks or I/O, making it:
//!
//! - **Deterministic**: The same commands and piece kinds always produce the same game
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`pieces`]: Tetromino geometry tables and the [`Piece`] value
//! - [`board`]: 10x20 game board with collision detection and line clearing
//! - [`game_state`]: Falling-piece state machine, scoring and level progression
//! - [`scoring`]: Line clear points and gravity interval per level
//! - [`snapshot`]: Copyable per-frame view for renderers
//! - [`rng`]: Seeded uniform piece source for callers
//!
//! # Game Rules
//!
//! - **Spawn**: every piece appears in its north orientation at (3, 0); a
//!   blocked spawn ends the game
//! - **Rotation**: clockwise only, in place, no wall kicks
//! - **Locking**: immediate, when a downward step fails (no lock delay)
//! - **Scoring**: 100/300/500/800 for 1/2/3/4 lines, times (level + 1)
//! - **Levels**: one per 10 lines; gravity starts at 1000ms and speeds up
//!   75ms per level down to 100ms
//!
//! # Example
//!
//! ```
//! use mctetris_core::{GameState, PieceQueue};
//!
//! let mut queue = PieceQueue::new(12345);
//! let mut game = GameState::new();
//!
//! assert!(game.spawn(queue.draw()));
//! game.try_move(-1, 0);
//! game.try_rotate_cw();
//! game.hard_drop();
//!
//! assert!(game.active().is_none());
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The core never reads a clock. Callers ask
//! [`GameState::gravity_delay_ms`](game_state::GameState::gravity_delay_ms)
//! how long to wait and call
//! [`GameState::tick_gravity`](game_state::GameState::tick_gravity) when
//! that much time has passed.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use mctetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use pieces::{cell_category, get_shape, shape_for, Piece, SPAWN_POSITION};
pub use rng::{PieceQueue, SimpleRng};
pub use scoring::{calculate_line_score, gravity_delay_ms, score_for_lines};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
