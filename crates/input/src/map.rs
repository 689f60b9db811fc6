//! Key mapping from terminal events to game actions and menu navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::scheme::ControlScheme;
use crate::types::GameAction;

/// Navigation intents on the menu screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Select,
    Back,
    Quit,
}

/// Map keyboard input to game actions.
///
/// Pause (P) and quit (Q, Ctrl-C) are shared by every scheme; everything else
/// goes through the scheme's bindings.
pub fn handle_key_event(scheme: ControlScheme, key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }
    match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        code => scheme.action_for(code),
    }
}

/// Map keyboard input on a menu screen.
pub fn map_menu_key(key: KeyEvent) -> Option<MenuKey> {
    if should_quit(key) {
        return Some(MenuKey::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MenuKey::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MenuKey::Down),
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Some(MenuKey::Select),
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => Some(MenuKey::Back),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
