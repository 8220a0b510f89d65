//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! Only changed runs of glyphs are sent after the first frame; a size change
//! falls back to a full redraw.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    front: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            front: None,
            out: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor, mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(EnableMouseCapture)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo everything `enter` did.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(DisableMouseCapture)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (after a resize event).
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Present `next`, then hand the previous frame back through `next`
    /// so the caller can draw into it without reallocating.
    pub fn present(&mut self, next: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        match self.front.take() {
            Some(mut prev) if prev.width() == next.width() && prev.height() == next.height() => {
                encode_changes(&prev, next, &mut self.out)?;
                std::mem::swap(&mut prev, next);
                self.front = Some(prev);
            }
            _ => {
                encode_full(next, &mut self.out)?;
                self.front = Some(next.clone());
            }
        }
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-screen redraw into `out`.
pub fn encode_full(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let g = fb.get(x, y).unwrap_or_default();
            set_pen(out, &mut pen, g.style)?;
            out.queue(Print(g.ch))?;
        }
    }
    reset_pen(out)
}

/// Encode only the glyph runs that differ between two same-sized frames.
pub fn encode_changes(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x + len {
            let g = next.get(cx, y).unwrap_or_default();
            set_pen(out, &mut pen, g.style)?;
            out.queue(Print(g.ch))?;
        }
    }
    reset_pen(out)
}

/// Horizontal runs `(x, y, len)` of differing glyphs, top to bottom.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let differs = prev.get(x, y) != next.get(x, y);
            match (differs, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, y, next.width() - s));
        }
    }
    runs
}

fn set_pen(out: &mut Vec<u8>, pen: &mut Option<Style>, style: Style) -> Result<()> {
    if *pen == Some(style) {
        return Ok(());
    }
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.reverse {
        out.queue(SetAttribute(Attribute::Reverse))?;
    }
    *pen = Some(style);
    Ok(())
}

fn reset_pen(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
