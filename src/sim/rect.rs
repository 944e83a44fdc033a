//! Axis-aligned rectangle geometry for paddles and the ball
//!
//! Screen space: origin at the top-left, y grows downward.

use glam::Vec2;

/// An axis-aligned box, stored by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Horizontal position (alias of `left`)
    #[inline]
    pub fn x(&self) -> f32 {
        self.left
    }

    /// Vertical position (alias of `top`)
    #[inline]
    pub fn y(&self) -> f32 {
        self.top
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    pub fn set_x(&mut self, x: f32) {
        self.left = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.top = y;
    }

    /// Move the box so its center lands on `center`, keeping its size
    pub fn set_center(&mut self, center: Vec2) {
        self.left = center.x - self.width / 2.0;
        self.top = center.y - self.height / 2.0;
    }

    /// Move the box vertically so its bottom edge lands on `bottom`
    pub fn set_bottom(&mut self, bottom: f32) {
        self.top = bottom - self.height;
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}
