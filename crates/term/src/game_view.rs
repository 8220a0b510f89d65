//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Layout is shared between drawing and mouse
//! hit-testing so a click always lands on the cell that was drawn there.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Coord, Symbol};

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

/// Where the bordered board sits inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border
    pub x: u16,
    pub y: u16,
    /// Border size, inclusive of the border itself
    pub w: u16,
    pub h: u16,
}

const BOARD_BG: Rgb = Rgb::new(28, 28, 36);
const SELECT_BG: Rgb = Rgb::new(90, 80, 20);
const FLASH_BG: Rgb = Rgb::new(70, 70, 90);
const PANEL_W: u16 = 18;

/// One color and glyph per symbol identifier.
const PALETTE: [(Rgb, char); 8] = [
    (Rgb::new(230, 80, 80), '●'),
    (Rgb::new(240, 210, 70), '▲'),
    (Rgb::new(80, 140, 240), '■'),
    (Rgb::new(90, 210, 110), '◆'),
    (Rgb::new(210, 110, 220), '★'),
    (Rgb::new(80, 210, 220), '♥'),
    (Rgb::new(250, 160, 60), '♣'),
    (Rgb::new(235, 235, 235), '✚'),
];

/// Glyph and color used for a symbol
pub fn symbol_glyph(symbol: Symbol) -> (Rgb, char) {
    PALETTE[symbol as usize % PALETTE.len()]
}

/// A lightweight terminal renderer for the match-3 board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 leaves room for selection brackets around a centred glyph.
        Self {
            cell_w: 3,
            cell_h: 1,
            show_help: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            show_help: true,
        }
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Centred board position, or `None` when the viewport is too small.
    pub fn layout(&self, size: u8, viewport: Viewport) -> Option<BoardLayout> {
        let w = (size as u16) * self.cell_w + 2;
        let h = (size as u16) * self.cell_h + 2;
        if w > viewport.width || h > viewport.height {
            return None;
        }
        Some(BoardLayout {
            x: (viewport.width - w) / 2,
            y: (viewport.height - h) / 2,
            w,
            h,
        })
    }

    /// Board cell under a terminal position, if any.
    pub fn cell_at(&self, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<Coord> {
        let layout = self.layout(snap.size, viewport)?;
        let inner_x = x.checked_sub(layout.x + 1)?;
        let inner_y = y.checked_sub(layout.y + 1)?;
        let col = inner_x / self.cell_w;
        let row = inner_y / self.cell_h;
        let at = Coord::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?);
        at.in_bounds(snap.size).then_some(at)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let layout = match self.layout(snap.size, viewport) {
            Some(layout) => layout,
            None => {
                fb.put_str(0, 0, "terminal too small", Style::default().bold());
                return;
            }
        };

        let border = Style::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.draw_box(layout.x, layout.y, layout.w, layout.h, border);

        for row in 0..snap.size {
            for col in 0..snap.size {
                self.draw_cell(fb, &layout, snap, Coord::new(row, col));
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, layout: &BoardLayout, snap: &GameSnapshot, at: Coord) {
        let Some(symbol) = snap.symbol_at(at) else {
            return;
        };
        let (fg, ch) = symbol_glyph(symbol);
        let selected = snap.selection == Some(at);

        let bg = if selected {
            SELECT_BG
        } else if snap.is_flashing(at) {
            FLASH_BG
        } else {
            BOARD_BG
        };
        let mut style = Style::plain(fg, bg);
        if snap.is_flashing(at) || selected {
            style = style.bold();
        }
        if snap.cursor == at {
            style = style.reversed();
        }

        let px = layout.x + 1 + (at.col as u16) * self.cell_w;
        let py = layout.y + 1 + (at.row as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let mid_x = px + self.cell_w / 2;
        let mid_y = py + self.cell_h / 2;
        fb.put_char(mid_x, mid_y, ch, style);
        if selected && self.cell_w >= 3 {
            fb.put_char(px, mid_y, '[', style);
            fb.put_char(px + self.cell_w - 1, mid_y, ']', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.w).saturating_add(2);
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let label = Style::default().bold();
        let value = Style::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let gain = Style::plain(Rgb::new(120, 230, 120), Rgb::new(0, 0, 0)).bold();

        let mut y = layout.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        let digits = fb.put_u32(panel_x, y, snap.score, value);
        if !snap.flash.is_empty() && snap.last_delta > 0 {
            let plus_x = panel_x + digits + 1;
            fb.put_char(plus_x, y, '+', gain);
            fb.put_u32(plus_x + 1, y, snap.last_delta, gain);
        }
        y += 2;

        fb.put_str(panel_x, y, "SWAPS", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.swaps, value);
        y += 2;

        fb.put_str(panel_x, y, "GAME", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.game_id, value);
        y += 2;

        fb.put_str(panel_x, y, "SELECTED", label);
        y += 1;
        match snap.selection {
            Some(at) => {
                let comma_x = panel_x + fb.put_u32(panel_x, y, at.row as u32, value);
                fb.put_char(comma_x, y, ',', value);
                fb.put_u32(comma_x + 1, y, at.col as u32, value);
            }
            None => fb.put_str(panel_x, y, "-", value),
        }
        y += 2;

        if !self.show_help {
            return;
        }
        let dim = Style::plain(Rgb::new(130, 130, 140), Rgb::new(0, 0, 0));
        for line in [
            "arrows  move",
            "space   select",
            "esc     cancel",
            "click   select",
            "r       new board",
            "n       restart",
            "q       quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y += 1;
        }
    }
}
