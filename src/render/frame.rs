//! Cell-grid frame assembled per render pass and flushed as ANSI.
//!
//! The shell's layout is small and fixed, so the frame repaints in full
//! on every present; there is no diffing stage. Wide glyphs (the emoji
//! file icons) occupy two cells — the second is a continuation cell that
//! the flush skips.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ansi;
use crate::color::Rgba;
use crate::style::Style;

/// Continuation marker for the trailing cell of a wide glyph.
const CONTINUATION: char = '\0';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    ch: char,
    style: Style,
}

impl Cell {
    const BLANK: Self = Self {
        ch: ' ',
        style: Style::NONE,
    };
}

/// A width×height grid of styled cells.
#[derive(Clone, Debug)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Frame {
    /// Create a blank frame.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    /// Frame width in columns.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Frame height in rows.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Fill the whole frame with a background color.
    pub fn clear(&mut self, bg: Rgba) {
        let cell = Cell {
            ch: ' ',
            style: Style::bg(bg),
        };
        self.cells.fill(cell);
    }

    /// Fill a rectangle with a background color. Out-of-bounds parts are
    /// clipped.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, bg: Rgba) {
        let style = Style::bg(bg);
        for row in y..y.saturating_add(h).min(self.height) {
            for col in x..x.saturating_add(w).min(self.width) {
                self.set(col, row, ' ', style);
            }
        }
    }

    /// Draw text starting at a cell position, advancing by display width.
    /// Text past the right edge is clipped.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) {
        if y >= self.height {
            return;
        }
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let width = grapheme.width().max(1) as u16;
            if col >= self.width {
                break;
            }
            let ch = grapheme.chars().next().unwrap_or(' ');
            self.set(col, y, ch, style);
            if width > 1 && col + 1 < self.width {
                self.set(col + 1, y, CONTINUATION, style);
            }
            col = col.saturating_add(width);
        }
    }

    /// Character and style at a cell, if in bounds. Continuation cells
    /// read as `None`.
    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Option<(char, Style)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let cell = self.cells[self.index(x, y)];
        if cell.ch == CONTINUATION {
            return None;
        }
        Some((cell.ch, cell.style))
    }

    /// The frame row as plain text, continuation cells elided.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.cell(x, y).map(|(ch, _)| ch))
            .collect()
    }

    /// Serialize the frame as ANSI: home cursor, then every row with SGR
    /// changes emitted only at style boundaries.
    #[must_use]
    pub fn to_ansi(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 4);
        let mut current_style: Option<Style> = None;
        for y in 0..self.height {
            out.push_str(&ansi::cursor_to(0, y));
            for x in 0..self.width {
                let cell = self.cells[self.index(x, y)];
                if cell.ch == CONTINUATION {
                    continue;
                }
                if current_style != Some(cell.style) {
                    ansi::push_sgr(&mut out, cell.style);
                    current_style = Some(cell.style);
                }
                out.push(cell.ch);
            }
        }
        out.push_str(ansi::RESET);
        out
    }

    fn set(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        self.cells[idx] = Cell { ch, style };
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }
}
