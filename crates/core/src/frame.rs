//! Frame module - immutable glyph blocks
//!
//! A frame is a named multi-line block of characters (a ship, a piece of
//! debris, one step of an explosion). Its size is computed once on
//! construction and frames are shared read-only between entities.

use std::fmt;

/// Size of a multi-line text block as `(height, width)`.
///
/// Height is the number of lines, width the longest line in characters.
/// Empty text is `(0, 0)`.
pub fn frame_size(text: &str) -> (usize, usize) {
    let mut height = 0;
    let mut width = 0;
    for line in text.lines() {
        height += 1;
        width = width.max(line.chars().count());
    }
    (height, width)
}

/// An immutable named glyph block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    name: String,
    content: String,
    height: usize,
    width: usize,
}

impl Frame {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let (height, width) = frame_size(&content);
        Self {
            name: name.into(),
            content,
            height,
            width,
        }
    }

    /// A one-cell frame, used for stars and projectiles.
    pub fn glyph(ch: char) -> Self {
        Self::new(ch.to_string(), ch.to_string())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.content.lines()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn size(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({}, {}x{})", self.name, self.height, self.width)
    }
}
