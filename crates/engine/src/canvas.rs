//! Render surface seam and the clipped drawing helpers tasks use.
//!
//! The surface is a fixed-size character grid with a one-cell border that
//! tasks never draw into. All helpers below clip to the interior
//! `1..rows-1 x 1..cols-1`; callers may pass positions that are partly or
//! entirely off-screen.

use std::cell::RefCell;
use std::rc::Rc;

use space_garbage_core::Frame;
use space_garbage_types::GlyphStyle;

pub trait Canvas {
    /// `(height, width)` in cells, border included.
    fn bounds(&self) -> (u16, u16);

    fn draw_glyph(&mut self, row: u16, col: u16, ch: char, style: GlyphStyle);

    /// Push everything drawn so far to the screen.
    fn present(&mut self) -> anyhow::Result<()>;
}

/// Shared handle, so a caller can keep inspecting a surface it handed over.
impl<C: Canvas + ?Sized> Canvas for Rc<RefCell<C>> {
    fn bounds(&self) -> (u16, u16) {
        self.borrow().bounds()
    }

    fn draw_glyph(&mut self, row: u16, col: u16, ch: char, style: GlyphStyle) {
        self.borrow_mut().draw_glyph(row, col, ch, style)
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.borrow_mut().present()
    }
}

/// Draw with a style, or overwrite the same cells with blanks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Draw(GlyphStyle),
    Erase,
}

fn in_interior(rows: u16, cols: u16, row: i64, col: i64) -> bool {
    row > 0 && row < i64::from(rows) - 1 && col > 0 && col < i64::from(cols) - 1
}

/// Blit `frame` with its top-left cell at `(x, y)`, rounded to the nearest cell.
///
/// Spaces in the frame are transparent: they neither draw nor erase.
pub fn draw_frame(canvas: &mut dyn Canvas, x: f64, y: f64, frame: &Frame, ink: Ink) {
    let (rows, cols) = canvas.bounds();
    let (max_row, max_col) = (i64::from(rows) - 1, i64::from(cols) - 1);
    let top = y.round() as i64;
    let left = x.round() as i64;

    for (dy, line) in frame.lines().enumerate() {
        let row = top + dy as i64;
        if row <= 0 {
            continue;
        }
        if row >= max_row {
            break;
        }
        for (dx, ch) in line.chars().enumerate() {
            let col = left + dx as i64;
            if col <= 0 {
                continue;
            }
            if col >= max_col {
                break;
            }
            if ch == ' ' {
                continue;
            }
            let (ch, style) = match ink {
                Ink::Draw(style) => (ch, style),
                Ink::Erase => (' ', GlyphStyle::Normal),
            };
            canvas.draw_glyph(row as u16, col as u16, ch, style);
        }
    }
}

/// Single cell, dropped when outside the interior.
pub fn put_glyph(canvas: &mut dyn Canvas, row: i64, col: i64, ch: char, style: GlyphStyle) {
    let (rows, cols) = canvas.bounds();
    if in_interior(rows, cols, row, col) {
        canvas.draw_glyph(row as u16, col as u16, ch, style);
    }
}

/// One line of text starting at `(row, col)`. Unlike [`draw_frame`], spaces
/// are written, so padding erases older, longer text.
pub fn draw_text(canvas: &mut dyn Canvas, row: i64, col: i64, text: &str, style: GlyphStyle) {
    for (dx, ch) in text.chars().enumerate() {
        put_glyph(canvas, row, col + dx as i64, ch, style);
    }
}

/// In-memory surface for headless runs and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphGrid {
    rows: u16,
    cols: u16,
    cells: Vec<(char, GlyphStyle)>,
    presents: u64,
}

impl GlyphGrid {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![(' ', GlyphStyle::Normal); rows as usize * cols as usize],
            presents: 0,
        }
    }

    fn index(&self, row: u16, col: u16) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row as usize * self.cols as usize + col as usize)
    }

    pub fn get(&self, row: u16, col: u16) -> Option<char> {
        self.index(row, col).map(|i| self.cells[i].0)
    }

    pub fn style(&self, row: u16, col: u16) -> Option<GlyphStyle> {
        self.index(row, col).map(|i| self.cells[i].1)
    }

    /// Row contents as a string, trailing blanks included.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|col| self.get(row, col))
            .collect()
    }

    /// Cells currently holding `ch`.
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|(c, _)| *c == ch).count()
    }

    pub fn presents(&self) -> u64 {
        self.presents
    }
}

impl Canvas for GlyphGrid {
    fn bounds(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn draw_glyph(&mut self, row: u16, col: u16, ch: char, style: GlyphStyle) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = (ch, style);
        }
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.presents += 1;
        Ok(())
    }
}
