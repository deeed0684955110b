//! Positioned frames and bounding-box collision.
//!
//! Collision is a corner-in-box approximation: two boxes intersect when either
//! one contains a corner of the other. Edges are inclusive. Two long thin boxes
//! crossing like a plus sign have no corner inside each other and are reported
//! as disjoint; glyph art is blocky enough for this to be acceptable.

use std::rc::Rc;

use crate::frame::Frame;

/// Axis-aligned box `[left, right] x [top, bottom]`, closed on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Box of a `height x width` block whose top-left cell is at `(x, y)`.
    pub fn new(x: f64, y: f64, height: usize, width: usize) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width as f64,
            bottom: y + height as f64,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.left <= x && x <= self.right && self.top <= y && y <= self.bottom
    }

    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.left, self.top),
            (self.right, self.top),
            (self.left, self.bottom),
            (self.right, self.bottom),
        ]
    }

    /// One-directional test: does `self` contain any corner of `other`?
    ///
    /// A small box nested inside a larger one is only seen from the larger
    /// box's side, which is why [`BoundingBox::intersects`] runs it both ways.
    pub fn contains_any_corner_of(&self, other: &BoundingBox) -> bool {
        other.corners().iter().any(|&(x, y)| self.contains(x, y))
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.contains_any_corner_of(other) || other.contains_any_corner_of(self)
    }
}

/// A frame placed at a real-valued position.
///
/// Positions keep sub-cell precision and are rounded only when drawn.
#[derive(Debug, Clone)]
pub struct Entity {
    frame: Rc<Frame>,
    x: f64,
    y: f64,
    start_x: f64,
    start_y: f64,
}

impl Entity {
    pub fn new(frame: Rc<Frame>, x: f64, y: f64) -> Self {
        Self {
            frame,
            x,
            y,
            start_x: x,
            start_y: y,
        }
    }

    pub fn frame(&self) -> &Rc<Frame> {
        &self.frame
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Where the entity was created.
    pub fn origin(&self) -> (f64, f64) {
        (self.start_x, self.start_y)
    }

    /// Overwrite the position. Callers clamp to the playfield.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Swap the visual without moving.
    pub fn set_frame(&mut self, frame: Rc<Frame>) {
        self.frame = frame;
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.frame.height(), self.frame.width())
    }

    pub fn intersects(&self, other: &Entity) -> bool {
        self.bounding_box().intersects(&other.bounding_box())
    }
}
