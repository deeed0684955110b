//! Framebuffer and style types for terminal rendering.

use space_garbage_engine::Canvas;
use space_garbage_types::GlyphStyle;

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

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

impl From<GlyphStyle> for CellStyle {
    fn from(style: GlyphStyle) -> Self {
        Self {
            bold: style == GlyphStyle::Bold,
            dim: style == GlyphStyle::Dim,
            ..Self::default()
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
///
/// Addressed as `(x, y)` = `(column, row)`; the [`Canvas`] impl translates
/// from the engine's `(row, col)` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Box-drawing frame around the whole buffer.
    pub fn draw_border(&mut self, style: CellStyle) {
        let (w, h) = (self.width, self.height);
        if w < 2 || h < 2 {
            return;
        }

        self.put_char(0, 0, '┌', style);
        self.put_char(w - 1, 0, '┐', style);
        self.put_char(0, h - 1, '└', style);
        self.put_char(w - 1, h - 1, '┘', style);

        for dx in 1..w - 1 {
            self.put_char(dx, 0, '─', style);
            self.put_char(dx, h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            self.put_char(0, dy, '│', style);
            self.put_char(w - 1, dy, '│', style);
        }
    }

    /// Characters of row `y`, for assertions.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .collect()
    }
}

/// Drawing only; presenting needs a renderer (see `TerminalCanvas`).
impl Canvas for FrameBuffer {
    fn bounds(&self) -> (u16, u16) {
        (self.height, self.width)
    }

    fn draw_glyph(&mut self, row: u16, col: u16, ch: char, style: GlyphStyle) {
        self.put_char(col, row, ch, style.into());
    }

    fn present(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_surrounds_the_buffer() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.draw_border(CellStyle::default());
        assert_eq!(fb.row_text(0), "┌──┐");
        assert_eq!(fb.row_text(1), "│  │");
        assert_eq!(fb.row_text(2), "└──┘");
    }

    #[test]
    fn canvas_uses_row_col_order() {
        let mut fb = FrameBuffer::new(5, 3);
        assert_eq!(fb.bounds(), (3, 5));
        fb.draw_glyph(1, 3, '*', GlyphStyle::Bold);
        let cell = fb.get(3, 1).unwrap();
        assert_eq!(cell.ch, '*');
        assert!(cell.style.bold);
        assert!(!cell.style.dim);
    }

    #[test]
    fn glyph_style_maps_to_attributes() {
        assert!(CellStyle::from(GlyphStyle::Dim).dim);
        assert_eq!(CellStyle::from(GlyphStyle::Normal), CellStyle::default());
    }
}
