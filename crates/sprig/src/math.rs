//! Math types and glam re-exports.
//!
//! We re-export [glam](https://docs.rs/glam) types so users don't need to
//! depend on it directly. [`IRect`] is the pixel-space rectangle regions are
//! carved with; [`Rect`] is its normalized (UV) counterpart.

pub use glam::Vec2;

/// An integer rectangle in texture pixel space.
///
/// `(x, y)` is the top-left corner; `right` and `bottom` are exclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`.
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Width and height as a float vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// `true` if the rectangle covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns `true` if `other` lies entirely inside `self` (edges may touch).
    pub const fn contains_rect(&self, other: &IRect) -> bool {
        // Widened so edges past i32::MAX still compare exactly.
        other.x as i64 >= self.x as i64
            && other.y as i64 >= self.y as i64
            && other.x as i64 + other.width as i64 <= self.x as i64 + self.width as i64
            && other.y as i64 + other.height as i64 <= self.y as i64 + self.height as i64
    }
}

/// A normalized rectangle within a texture (UV space, 0.0–1.0).
///
/// Coordinates are in UV space where (0,0) is the top-left corner and (1,1) is
/// the bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// The full texture (0,0) to (1,1).
    pub const FULL: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ONE,
    };

    /// Build from pixel coordinates and texture dimensions.
    pub fn from_pixels(x: f32, y: f32, w: f32, h: f32, tex_w: f32, tex_h: f32) -> Self {
        Self {
            min: Vec2::new(x / tex_w, y / tex_h),
            max: Vec2::new((x + w) / tex_w, (y + h) / tex_h),
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::FULL
    }
}
