//! Geometry domain: axis-aligned rectangles in room space.
//!
//! Room space has its origin at the top-left corner of the room and `y` grows
//! downward, so a rectangle's `top` is its smallest `y`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};


/// Axis-aligned rectangle used for collision footprints and trigger zones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_position(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Square of side `2 * half_extent` centred on `center`.
    pub fn centered(center: Vec2, half_extent: f32) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            half_extent * 2.0,
            half_extent * 2.0,
        )
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Trigger zone of an interactive object: a square of reach `reach`
    /// around the object's centre.
    pub fn trigger_zone(&self, reach: f32) -> Self {
        Self::centered(self.center(), reach)
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Smallest rectangle covering both inputs.
    pub fn union(&self, other: &Bounds) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }
}
