//! The scene's render surface on a real terminal.

use anyhow::Result;

use space_garbage_engine::Canvas;
use space_garbage_types::GlyphStyle;

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::renderer::TerminalRenderer;

const BORDER_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(120, 120, 140),
    bg: Rgb::new(0, 0, 0),
    bold: false,
    dim: false,
};

/// Framebuffer plus renderer. Tasks draw into the buffer; `present` sends the
/// cells that changed since the previous present.
pub struct TerminalCanvas {
    fb: FrameBuffer,
    renderer: TerminalRenderer,
}

impl TerminalCanvas {
    /// A `rows x cols` surface with its border already drawn.
    pub fn new(rows: u16, cols: u16) -> Self {
        let mut fb = FrameBuffer::new(cols, rows);
        fb.draw_border(BORDER_STYLE);
        Self {
            fb,
            renderer: TerminalRenderer::new(),
        }
    }

    /// Sized to the current terminal.
    pub fn fullscreen() -> Result<Self> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok(Self::new(rows, cols))
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }
}

impl Canvas for TerminalCanvas {
    fn bounds(&self) -> (u16, u16) {
        self.fb.bounds()
    }

    fn draw_glyph(&mut self, row: u16, col: u16, ch: char, style: GlyphStyle) {
        self.fb.draw_glyph(row, col, ch, style);
    }

    fn present(&mut self) -> Result<()> {
        self.renderer.present(&self.fb)
    }
}
