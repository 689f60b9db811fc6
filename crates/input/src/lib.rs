//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s under a selectable
//! [`ControlScheme`], and into [`MenuKey`]s for menu navigation.

pub mod map;
pub mod scheme;

pub use mctetris_types as types;

pub use map::{handle_key_event, map_menu_key, should_quit, MenuKey};
pub use scheme::ControlScheme;
