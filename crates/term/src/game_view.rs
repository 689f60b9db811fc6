//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Session state shown around the board that the core does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    pub next: Option<PieceKind>,
    pub scheme_name: &'a str,
    pub scheme_hint: &'a str,
    pub paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Gap between the board frame and the side panels.
const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 18;
const STATS_H: u16 = 6;
/// Header line above the frame and footer line below it.
const CHROME_H: u16 = 2;

/// A lightweight terminal renderer for the game screen.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Screen positions computed once per frame.
#[derive(Debug, Clone, Copy)]
struct Layout {
    left: u16,
    top: u16,
    frame_w: u16,
    frame_h: u16,
    panel_x: u16,
    next_h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let total_w = frame_w + PANEL_GAP + PANEL_W;
        let total_h = frame_h + CHROME_H;

        let left = viewport.width.saturating_sub(total_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            left,
            top,
            frame_w,
            frame_h,
            panel_x: left + frame_w + PANEL_GAP,
            next_h: 4 * self.cell_h + 4,
        }
    }

    /// Render the game screen into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let layout = self.layout(viewport);
        let board_y = layout.top + 1;

        self.draw_header(fb, snap, hud, layout.left, layout.top);

        fb.draw_box(layout.left, board_y, layout.frame_w, layout.frame_h, BORDER);
        fb.fill_rect(
            layout.left + 1,
            board_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            WELL,
        );

        let origin_x = layout.left + 1;
        let origin_y = board_y + 1;

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                if let Some(kind) = Cell::from_code(code).piece_kind() {
                    self.draw_block(fb, origin_x, origin_y, x as u16, y as u16, kind);
                }
            }
        }

        if let Some(active) = snap.active {
            for block in get_shape(active.kind, active.rotation) {
                let x = i16::from(active.x) + i16::from(block.x);
                let y = i16::from(active.y) + i16::from(block.y);
                if (0..BOARD_WIDTH as i16).contains(&x) && (0..BOARD_HEIGHT as i16).contains(&y) {
                    self.draw_block(fb, origin_x, origin_y, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_next_panel(fb, hud.next, layout.panel_x, board_y, layout.next_h);
        self.draw_stats_panel(fb, snap, layout.panel_x, board_y + layout.next_h + 1);

        let footer_y = board_y + layout.frame_h;
        let x = fb.put_str(layout.left, footer_y, hud.scheme_hint, TEXT);
        fb.put_str(layout.left + x, footer_y, "  P: pause  Q: quit", TEXT);

        let center_x = layout.left + layout.frame_w / 2;
        let center_y = board_y + layout.frame_h / 2;
        if hud.paused {
            fb.put_str_centered(center_x, center_y, "PAUSED", OVERLAY);
        } else if snap.game_over {
            fb.put_str_centered(center_x, center_y, "GAME OVER", OVERLAY);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        left: u16,
        y: u16,
    ) {
        let mut x = left;
        x += fb.put_str(x, y, "Score: ", TEXT);
        x += fb.put_u32(x, y, snap.score, TEXT);
        x += fb.put_str(x, y, "  Level: ", TEXT);
        x += fb.put_u32(x, y, snap.level, TEXT);
        x += fb.put_str(x, y, "  Lines: ", TEXT);
        x += fb.put_u32(x, y, snap.lines, TEXT);
        x += fb.put_str(x, y, "  Scheme: ", TEXT);
        fb.put_str(x, y, hud.scheme_name, TEXT);
    }

    fn draw_next_panel(
        &self,
        fb: &mut FrameBuffer,
        next: Option<PieceKind>,
        x: u16,
        y: u16,
        h: u16,
    ) {
        fb.draw_box(x, y, PANEL_W, h, BORDER);
        fb.put_str(x + 2, y, "NEXT", TITLE);

        let Some(kind) = next else {
            return;
        };
        for block in get_shape(kind, Rotation::North) {
            if (0..4).contains(&block.x) && (0..4).contains(&block.y) {
                self.draw_block(fb, x + 2, y + 2, block.x as u16, block.y as u16, kind);
            }
        }
    }

    fn draw_stats_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        fb.draw_box(x, y, PANEL_W, STATS_H, BORDER);
        fb.put_str(x + 2, y, "STATS", TITLE);

        let rows = [
            ("Score: ", snap.score),
            ("Level: ", snap.level),
            ("Lines: ", snap.lines),
        ];
        for (i, (label, value)) in rows.into_iter().enumerate() {
            let row_y = y + 2 + i as u16;
            let w = fb.put_str(x + 2, row_y, label, TEXT);
            fb.put_u32(x + 2 + w, row_y, value, TEXT);
        }
    }

    /// Fill one board cell (`cell_w` x `cell_h` terminal cells).
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle::plain(WELL.bg, piece_color(kind));
        fb.fill_rect(
            origin_x + x * self.cell_w,
            origin_y + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            ' ',
            style,
        );
    }
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const TEXT: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220), BLACK);
const TITLE: CellStyle = TEXT.bold();
const BORDER: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200), BLACK);
const WELL: CellStyle = CellStyle::plain(Rgb::new(80, 80, 90), Rgb::new(30, 30, 40));
const OVERLAY: CellStyle = CellStyle::plain(Rgb::new(255, 255, 255), BLACK).bold();

/// Block color per kind, matching the usual curses palette.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 255, 255),
    }
}
