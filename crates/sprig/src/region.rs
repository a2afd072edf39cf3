//! # Region — A Rectangular Slice of a Texture
//!
//! A [`TextureRegion`] names a sub-rectangle of a texture: one frame of a
//! sprite sheet, one icon in an atlas, or the whole image. It is computed once
//! and then handed to the draw helpers every frame.
//!
//! ## Carving
//!
//! Regions are carved from a parent region, with the child rectangle given
//! *relative* to the parent's top-left corner:
//!
//! ```text
//!  texture (100 x 100)
//!  ┌──────────────────────────────┐
//!  │   parent (10,10,50,50)       │
//!  │   ┌────────────────┐         │
//!  │   │                │         │
//!  │   │      carve(40,40,30,30)  │
//!  │   │           ┌────┼ ─ ─ ┐   │
//!  │   │           │ 10 │     ·   │   requested 30x30, kept 10x10
//!  │   └───────────┴────┘     ·   │
//!  │               └ ─ ─ ─ ─ ─┘   │
//!  └──────────────────────────────┘
//! ```
//!
//! Anything outside the parent is clamped away. A request that misses the
//! parent entirely produces a zero-area region, which is still valid (it just
//! draws nothing). [`TextureRegion::try_sub_region`] is the strict variant that
//! reports out-of-bounds requests as errors instead.
//!
//! ## UV Coordinates
//!
//! The four UV edges are normalized against the *parent's* rectangle, so they
//! always fall in `[0, 1]`. For regions carved straight from a texture this is
//! the usual texture-space UV.

use std::fmt;
use std::rc::Rc;

use crate::math::{IRect, Rect, Vec2};
use crate::texture::{SharedTexture, Texture};

/// A rectangular slice of a shared texture.
pub struct TextureRegion<T: Texture> {
    /// `None` once disposed.
    texture: Option<SharedTexture<T>>,
    source: IRect,
    center: Vec2,
    uv: Rect,
}

impl<T: Texture> TextureRegion<T> {
    /// A region covering the whole texture. UVs are `(0,0)-(1,1)`.
    pub fn new(texture: SharedTexture<T>) -> Self {
        let source = texture.bounds();
        Self {
            texture: Some(texture),
            center: center_of(&source),
            source,
            uv: Rect::FULL,
        }
    }

    /// Same as [`new`](Self::new), cloning the caller's handle.
    pub fn from_texture(texture: &SharedTexture<T>) -> Self {
        Self::new(Rc::clone(texture))
    }

    /// Carve a child region at `(x, y)` relative to this region's top-left.
    ///
    /// The result is clamped to this region's bounds, possibly down to zero
    /// area. The parent must not be disposed, `x` and `y` must be
    /// non-negative and `width` and `height` positive; these are checked in
    /// debug builds only.
    pub fn sub_region(&self, x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(
            !self.is_disposed(),
            "cannot carve a region from a disposed parent"
        );
        debug_assert!(
            x >= 0 && y >= 0,
            "region offset must be non-negative, got ({x}, {y})"
        );
        debug_assert!(
            width > 0 && height > 0,
            "region size must be positive, got {width}x{height}"
        );

        let parent = &self.source;
        let (cx, cw) = clamp_span(parent.left(), parent.right(), parent.x.saturating_add(x), width);
        let (cy, ch) = clamp_span(parent.top(), parent.bottom(), parent.y.saturating_add(y), height);

        self.carve(IRect::new(cx, cy, cw, ch))
    }

    /// [`sub_region`](Self::sub_region) taking the relative rectangle as a value.
    pub fn sub_region_rect(&self, rect: IRect) -> Self {
        self.sub_region(rect.x, rect.y, rect.width, rect.height)
    }

    /// Strict form of [`sub_region_rect`](Self::sub_region_rect): rejects
    /// anything that would have been clamped.
    pub fn try_sub_region(&self, rect: IRect) -> Result<Self, RegionError> {
        if self.is_disposed() {
            return Err(RegionError::Disposed);
        }
        if rect.x < 0 || rect.y < 0 {
            return Err(RegionError::NegativeOffset {
                x: rect.x,
                y: rect.y,
            });
        }
        if rect.width <= 0 || rect.height <= 0 {
            return Err(RegionError::NonPositiveSize {
                width: rect.width,
                height: rect.height,
            });
        }

        let local = IRect::new(0, 0, self.source.width, self.source.height);
        if !local.contains_rect(&rect) {
            return Err(RegionError::OutOfBounds {
                requested: rect,
                bounds: local,
            });
        }

        Ok(self.carve(IRect::new(
            self.source.x + rect.x,
            self.source.y + rect.y,
            rect.width,
            rect.height,
        )))
    }

    /// Release this region's hold on the texture. Idempotent.
    ///
    /// The engine texture is only dropped once no other region (or other
    /// holder of the [`SharedTexture`]) still references it.
    pub fn dispose(&mut self) {
        if let Some(texture) = self.texture.take() {
            log::debug!(
                "disposed texture region {:?}, {} other holder(s) of the texture remain",
                self.source,
                Rc::strong_count(&texture) - 1
            );
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.texture.is_none()
    }

    /// The shared texture, or `None` once disposed.
    pub fn texture(&self) -> Option<&SharedTexture<T>> {
        self.texture.as_ref()
    }

    /// The region's rectangle in texture pixel space.
    pub fn source_rect(&self) -> IRect {
        self.source
    }

    pub fn width(&self) -> i32 {
        self.source.width
    }

    pub fn height(&self) -> i32 {
        self.source.height
    }

    pub fn size(&self) -> Vec2 {
        self.source.size()
    }

    /// Center of the source rectangle in texture pixel space:
    /// `(x + width / 2, y + height / 2)`.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Center relative to the region's own top-left corner. This is the
    /// origin the centered draw helpers pass to the renderer.
    pub fn local_center(&self) -> Vec2 {
        self.source.size() * 0.5
    }

    /// UV bounds, normalized against the parent region.
    pub fn uv(&self) -> Rect {
        self.uv
    }

    pub fn left_uv(&self) -> f32 {
        self.uv.left()
    }

    pub fn right_uv(&self) -> f32 {
        self.uv.right()
    }

    pub fn top_uv(&self) -> f32 {
        self.uv.top()
    }

    pub fn bottom_uv(&self) -> f32 {
        self.uv.bottom()
    }

    fn carve(&self, source: IRect) -> Self {
        Self {
            texture: self.texture.clone(),
            center: center_of(&source),
            uv: relative_uv(&self.source, &source),
            source,
        }
    }
}

impl<T: Texture> Clone for TextureRegion<T> {
    fn clone(&self) -> Self {
        Self {
            texture: self.texture.clone(),
            source: self.source,
            center: self.center,
            uv: self.uv,
        }
    }
}

impl<T: Texture> fmt::Debug for TextureRegion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureRegion")
            .field("source", &self.source)
            .field("uv", &self.uv)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Clamp the span `start..start + len` into `lo..hi`, returning the clamped
/// start and a non-negative length.
fn clamp_span(lo: i32, hi: i32, start: i32, len: i32) -> (i32, i32) {
    let clamped = start.clamp(lo, hi);
    let end = start.saturating_add(len).min(hi);
    (clamped, (end - clamped).max(0))
}

fn center_of(rect: &IRect) -> Vec2 {
    Vec2::new(
        rect.x as f32 + rect.width as f32 / 2.0,
        rect.y as f32 + rect.height as f32 / 2.0,
    )
}

fn relative_uv(parent: &IRect, child: &IRect) -> Rect {
    Rect {
        min: Vec2::new(
            ratio(child.left() - parent.left(), parent.width),
            ratio(child.top() - parent.top(), parent.height),
        ),
        max: Vec2::new(
            ratio(child.right() - parent.left(), parent.width),
            ratio(child.bottom() - parent.top(), parent.height),
        ),
    }
}

// Zero-extent parents map to 0 rather than NaN.
fn ratio(offset: i32, extent: i32) -> f32 {
    if extent > 0 {
        offset as f32 / extent as f32
    } else {
        0.0
    }
}

// ── Errors ──────────────────────────────────────────────────────────────

/// Why a strict carve ([`TextureRegion::try_sub_region`]) was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// The parent region has been disposed.
    Disposed,
    /// The requested offset is negative.
    NegativeOffset { x: i32, y: i32 },
    /// The requested width or height is zero or negative.
    NonPositiveSize { width: i32, height: i32 },
    /// The requested rectangle extends past the parent. Both rectangles are
    /// relative to the parent's top-left corner.
    OutOfBounds { requested: IRect, bounds: IRect },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::Disposed => write!(f, "parent region is disposed"),
            RegionError::NegativeOffset { x, y } => {
                write!(f, "region offset ({x}, {y}) is negative")
            }
            RegionError::NonPositiveSize { width, height } => {
                write!(f, "region size {width}x{height} is not positive")
            }
            RegionError::OutOfBounds { requested, bounds } => write!(
                f,
                "region ({}, {}, {}x{}) does not fit in parent of size {}x{}",
                requested.x,
                requested.y,
                requested.width,
                requested.height,
                bounds.width,
                bounds.height
            ),
        }
    }
}

impl std::error::Error for RegionError {}
