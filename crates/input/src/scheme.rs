//! Key binding schemes for gameplay.

use crossterm::event::KeyCode;

use crate::types::GameAction;

/// One of the selectable gameplay layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlScheme {
    /// a/d move, s soft drop, w rotate, Space hard drop
    #[default]
    Wasd,
    /// Arrow keys, Up rotates, Space hard drop
    Arrows,
    /// Keypad digits 4/6 move, 5 soft drop, 8 rotate, 0 hard drop
    NumPad,
}

impl ControlScheme {
    /// Menu order.
    pub const ALL: [ControlScheme; 3] = [
        ControlScheme::Wasd,
        ControlScheme::Arrows,
        ControlScheme::NumPad,
    ];

    /// Parse scheme from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mctetris_input::ControlScheme;
    ///
    /// assert_eq!(ControlScheme::from_str("wasd"), Some(ControlScheme::Wasd));
    /// assert_eq!(ControlScheme::from_str("Arrows"), Some(ControlScheme::Arrows));
    /// assert_eq!(ControlScheme::from_str("NUMPAD"), Some(ControlScheme::NumPad));
    /// assert_eq!(ControlScheme::from_str("joystick"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wasd" => Some(ControlScheme::Wasd),
            "arrows" => Some(ControlScheme::Arrows),
            "numpad" => Some(ControlScheme::NumPad),
            _ => None,
        }
    }

    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            ControlScheme::Wasd => "WASD",
            ControlScheme::Arrows => "Arrows",
            ControlScheme::NumPad => "NumPad",
        }
    }

    /// One-line help shown under the board.
    pub fn hint(&self) -> &'static str {
        match self {
            ControlScheme::Wasd => "WASD: move/rotate  Space: hard drop",
            ControlScheme::Arrows => "Arrows: move/rotate  Space: hard drop",
            ControlScheme::NumPad => "NumPad 4/6/5/8: move/rotate  0: hard drop",
        }
    }

    /// Position in [`ControlScheme::ALL`].
    pub fn index(&self) -> usize {
        match self {
            ControlScheme::Wasd => 0,
            ControlScheme::Arrows => 1,
            ControlScheme::NumPad => 2,
        }
    }

    /// Gameplay action bound to `code` under this scheme.
    pub fn action_for(&self, code: KeyCode) -> Option<GameAction> {
        match self {
            ControlScheme::Wasd => match code {
                KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
                KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
                KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
                KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::RotateCw),
                KeyCode::Char(' ') => Some(GameAction::HardDrop),
                _ => None,
            },
            ControlScheme::Arrows => match code {
                KeyCode::Left => Some(GameAction::MoveLeft),
                KeyCode::Right => Some(GameAction::MoveRight),
                KeyCode::Down => Some(GameAction::SoftDrop),
                KeyCode::Up => Some(GameAction::RotateCw),
                KeyCode::Char(' ') => Some(GameAction::HardDrop),
                _ => None,
            },
            ControlScheme::NumPad => match code {
                KeyCode::Char('4') => Some(GameAction::MoveLeft),
                KeyCode::Char('6') => Some(GameAction::MoveRight),
                KeyCode::Char('5') => Some(GameAction::SoftDrop),
                KeyCode::Char('8') => Some(GameAction::RotateCw),
                KeyCode::Char('0') => Some(GameAction::HardDrop),
                _ => None,
            },
        }
    }
}
