//! Framebuffer of styled glyphs, independent of any terminal backend.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground/background colors plus the two attributes the view uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub reverse: bool,
}

impl Style {
    pub const fn plain(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            reverse: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn reversed(self) -> Self {
        Self {
            reverse: true,
            ..self
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::plain(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// One terminal cell: a character and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::new(' ', Style::default())
    }
}

/// Row-major grid of glyphs. Writes outside the buffer are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions, keeping the allocation when it is big enough.
    ///
    /// Contents are unspecified afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) == (width, height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.offset(x, y).map(|i| self.glyphs[i])
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.offset(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn clear(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        self.set(x, y, Glyph::new(ch, style));
    }

    /// Write a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Style) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x as usize + i;
            if cx >= self.width as usize {
                break;
            }
            self.put_char(cx as u16, y, ch, style);
        }
    }

    /// Decimal number without allocating. Returns the digit count.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: Style) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for i in 0..len {
            let ch = digits[len - 1 - i] as char;
            self.put_char(x.saturating_add(i as u16), y, ch, style);
        }
        len as u16
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Single-line box outline. Boxes smaller than 2x2 are skipped.
    pub fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        for cx in x + 1..right {
            self.put_char(cx, y, '─', style);
            self.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            self.put_char(x, cy, '│', style);
            self.put_char(right, cy, '│', style);
        }
        self.put_char(x, y, '┌', style);
        self.put_char(right, y, '┐', style);
        self.put_char(x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
    }
}
