//! Character framebuffer the game view draws into.

use blockfall_types::Rgb;

/// One styled terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
    pub ch: char,
    pub fg: Rgb,
    /// Background color; `None` keeps the terminal default.
    pub bg: Option<Rgb>,
}

impl Default for FrameCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(220, 220, 220),
            bg: None,
        }
    }
}

/// A fixed-size 2D buffer of styled cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<FrameCell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![FrameCell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<FrameCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Write one cell; out-of-frame writes are dropped.
    pub fn put(&mut self, x: u16, y: u16, cell: FrameCell) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = cell;
        }
    }

    /// Write a string left-to-right in the default style with the given
    /// foreground, clipping at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb) {
        for (i, ch) in text.chars().enumerate() {
            self.put(
                x.saturating_add(i as u16),
                y,
                FrameCell { ch, fg, bg: None },
            );
        }
    }

    /// Paint a solid two-column block (one board cell) with a background
    /// color.
    pub fn put_block(&mut self, x: u16, y: u16, bg: Rgb) {
        let cell = FrameCell {
            ch: ' ',
            fg: Rgb::new(220, 220, 220),
            bg: Some(bg),
        };
        self.put(x, y, cell);
        self.put(x + 1, y, cell);
    }
}
