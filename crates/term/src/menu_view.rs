//! MenuView: centered title plus a vertical list of items.
//!
//! Used for both the main menu and the control scheme picker.

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

/// One menu screen worth of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuModel<'a> {
    pub title: &'a str,
    pub items: &'a [&'a str],
    /// Highlighted (reverse video) item.
    pub selected: usize,
    /// When set, every item gets a two-column prefix and this one is starred.
    pub marked: Option<usize>,
    /// Help lines pinned to the bottom of the screen.
    pub help: &'a [&'a str],
}

pub const MAIN_MENU_TITLE: &str = "MCTETRIS";
pub const MAIN_MENU_ITEMS: [&str; 3] = ["Start Game", "Control Scheme", "Quit"];
pub const MAIN_MENU_HELP: [&str; 1] = ["Use Up/Down and Enter to select."];

pub const CONTROL_MENU_TITLE: &str = "CONTROL SCHEME";
pub const CONTROL_MENU_HELP: [&str; 2] = [
    "Enter selects. B or Esc returns.",
    "Current scheme is marked with *.",
];

const TEXT: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

#[derive(Debug, Default, Clone, Copy)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    pub fn render_into(&self, menu: &MenuModel<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let prefix_w = if menu.marked.is_some() { 2 } else { 0 };
        let max_w = menu
            .items
            .iter()
            .map(|item| item.chars().count() + prefix_w)
            .chain(std::iter::once(menu.title.chars().count()))
            .max()
            .unwrap_or(0) as u16;

        let item_count = menu.items.len() as u16;
        let start_y = (viewport.height / 2).saturating_sub(item_count);
        let start_x = viewport.width.saturating_sub(max_w) / 2;

        if let Some(title_y) = start_y.checked_sub(2) {
            let title_x = viewport
                .width
                .saturating_sub(menu.title.chars().count() as u16)
                / 2;
            fb.put_str(title_x, title_y, menu.title, TEXT.bold());
        }

        for (i, item) in menu.items.iter().enumerate() {
            let style = if i == menu.selected {
                TEXT.reversed()
            } else {
                TEXT
            };
            let y = start_y + i as u16;
            let mut x = start_x;
            if let Some(marked) = menu.marked {
                let mark = if marked == i { "* " } else { "  " };
                x += fb.put_str(x, y, mark, style);
            }
            fb.put_str(x, y, item, style);
        }

        let help_count = menu.help.len() as u16;
        for (i, line) in menu.help.iter().enumerate() {
            if let Some(y) = viewport.height.checked_sub(help_count + 1 - i as u16) {
                fb.put_str(2, y, line, TEXT);
            }
        }
    }

    pub fn render(&self, menu: &MenuModel<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(menu, viewport, &mut fb);
        fb
    }
}
