//! Application shell: menus, the control scheme picker and one running game.
//!
//! `App` owns everything outside the core rules (screen, pause flag, piece
//! source, gravity clock) and is driven by key events plus elapsed time, so
//! it can be tested without a terminal.

use crossterm::event::KeyEvent;

use crate::config::AppConfig;
use crate::core::{GameSnapshot, GameState, PieceQueue};
use crate::input::{handle_key_event, map_menu_key, ControlScheme, MenuKey};
use crate::term::menu_view::{
    CONTROL_MENU_HELP, CONTROL_MENU_TITLE, MAIN_MENU_HELP, MAIN_MENU_ITEMS, MAIN_MENU_TITLE,
};
use crate::term::{FrameBuffer, GameView, HudView, MenuModel, MenuView, Viewport};
use crate::types::{GameAction, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Controls,
    Game,
}

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    StartGame,
    ControlScheme,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::StartGame, MenuItem::ControlScheme, MenuItem::Quit];
}

const SCHEME_NAMES: [&str; 3] = [
    ControlScheme::ALL[0].name(),
    ControlScheme::ALL[1].name(),
    ControlScheme::ALL[2].name(),
];

pub struct App {
    screen: Screen,
    menu_index: usize,
    control_index: usize,
    scheme: ControlScheme,
    game: GameState,
    queue: PieceQueue,
    paused: bool,
    running: bool,
    gravity_elapsed_ms: u32,
    snapshot: GameSnapshot,
    game_view: GameView,
    menu_view: MenuView,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_seed(config.scheme, config.seed)
    }

    pub fn with_seed(scheme: ControlScheme, seed: u32) -> Self {
        Self {
            screen: Screen::Menu,
            menu_index: 0,
            control_index: scheme.index(),
            scheme,
            game: GameState::new(),
            queue: PieceQueue::new(seed),
            paused: false,
            running: true,
            gravity_elapsed_ms: 0,
            snapshot: GameSnapshot::default(),
            game_view: GameView::default(),
            menu_view: MenuView::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn scheme(&self) -> ControlScheme {
        self.scheme
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Kind the next spawn will use.
    pub fn next_piece(&self) -> PieceKind {
        self.queue.peek()
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn control_index(&self) -> usize {
        self.control_index
    }

    /// Handle one key press on whichever screen is showing.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Controls => self.handle_controls_key(key),
            Screen::Game => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let count = MenuItem::ALL.len();
        match map_menu_key(key) {
            Some(MenuKey::Up) => self.menu_index = (self.menu_index + count - 1) % count,
            Some(MenuKey::Down) => self.menu_index = (self.menu_index + 1) % count,
            Some(MenuKey::Select) => match MenuItem::ALL[self.menu_index] {
                MenuItem::StartGame => {
                    self.start_game();
                    self.set_screen(Screen::Game);
                }
                MenuItem::ControlScheme => {
                    self.control_index = self.scheme.index();
                    self.set_screen(Screen::Controls);
                }
                MenuItem::Quit => self.quit(),
            },
            Some(MenuKey::Quit) => self.quit(),
            Some(MenuKey::Back) | None => {}
        }
    }

    fn handle_controls_key(&mut self, key: KeyEvent) {
        let count = ControlScheme::ALL.len();
        match map_menu_key(key) {
            Some(MenuKey::Up) => self.control_index = (self.control_index + count - 1) % count,
            Some(MenuKey::Down) => self.control_index = (self.control_index + 1) % count,
            Some(MenuKey::Select) => {
                self.scheme = ControlScheme::ALL[self.control_index];
                log::info!("control scheme set to {}", self.scheme.name());
                self.set_screen(Screen::Menu);
            }
            Some(MenuKey::Back) => self.set_screen(Screen::Menu),
            Some(MenuKey::Quit) | None => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let Some(action) = handle_key_event(self.scheme, key) else {
            return;
        };
        match action {
            GameAction::Pause => {
                self.paused = !self.paused;
                log::debug!("paused = {}", self.paused);
            }
            GameAction::Quit => self.quit(),
            _ if self.paused || self.game.game_over() => {}
            _ => {
                self.game.apply_action(action);
            }
        }
    }

    /// Replace the running game with a fresh one and spawn its first piece.
    pub fn start_game(&mut self) {
        self.game = GameState::new();
        self.game.spawn(self.queue.draw());
        self.paused = false;
        self.gravity_elapsed_ms = 0;
        log::info!("game started (seed {})", self.queue.seed());
    }

    /// Advance the shell clock by `elapsed_ms`.
    ///
    /// Spawns the previewed piece once the previous one has locked and applies
    /// gravity whenever the accumulated time reaches the current delay.
    ///
    /// Time only accumulates while the game runs unpaused. Time banked before
    /// a pause is kept, but the paused interval itself never counts toward the
    /// next fall, so a piece does not drop the moment play resumes.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.screen != Screen::Game || self.paused || self.game.game_over() {
            return;
        }

        if self.game.active().is_none() {
            self.game.spawn(self.queue.draw());
            if self.game.game_over() {
                log::info!(
                    "game over: score {} level {} lines {}",
                    self.game.score(),
                    self.game.level(),
                    self.game.lines()
                );
                return;
            }
        }

        self.gravity_elapsed_ms = self.gravity_elapsed_ms.saturating_add(elapsed_ms);
        if self.gravity_elapsed_ms >= self.game.gravity_delay_ms() {
            self.gravity_elapsed_ms = 0;
            self.game.tick_gravity();
        }
    }

    /// Draw the current screen.
    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Menu => {
                let menu = MenuModel {
                    title: MAIN_MENU_TITLE,
                    items: &MAIN_MENU_ITEMS,
                    selected: self.menu_index,
                    marked: None,
                    help: &MAIN_MENU_HELP,
                };
                self.menu_view.render_into(&menu, viewport, fb);
            }
            Screen::Controls => {
                let menu = MenuModel {
                    title: CONTROL_MENU_TITLE,
                    items: &SCHEME_NAMES,
                    selected: self.control_index,
                    marked: Some(self.scheme.index()),
                    help: &CONTROL_MENU_HELP,
                };
                self.menu_view.render_into(&menu, viewport, fb);
            }
            Screen::Game => {
                self.game.snapshot_into(&mut self.snapshot);
                let hud = HudView {
                    next: Some(self.queue.peek()),
                    scheme_name: self.scheme.name(),
                    scheme_hint: self.scheme.hint(),
                    paused: self.paused,
                };
                self.game_view.render_into(&self.snapshot, &hud, viewport, fb);
            }
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            log::debug!("screen {:?} -> {:?}", self.screen, screen);
            self.screen = screen;
        }
    }

    fn quit(&mut self) {
        log::info!("quit requested");
        self.running = false;
    }
}
