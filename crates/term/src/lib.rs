//! Terminal rendering for mctetris.
//!
//! Views draw into a plain [`FrameBuffer`] (no I/O, unit-testable) and the
//! [`TerminalRenderer`] diffs successive frames onto the real terminal.
//!
//! Board cells are drawn 2 columns wide by default to keep blocks roughly
//! square in typical terminal fonts.

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;

pub use mctetris_core as core;
pub use mctetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, HudView, Viewport};
pub use menu_view::{MenuModel, MenuView};
pub use renderer::{encode_frame, TerminalRenderer};
