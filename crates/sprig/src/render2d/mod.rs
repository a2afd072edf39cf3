//! # Render2d — The Sprite Batch Seam
//!
//! Sprig does not render anything. It sits in front of an engine's batched
//! sprite renderer and turns "draw this region here" into the fully-specified
//! call that renderer expects.
//!
//! ## Architecture
//!
//! ```text
//!   host code                      sprig                         engine
//!  ┌──────────────┐   ┌─────────────────────────────┐   ┌──────────────────┐
//!  │ region +     │   │ draw helpers                │   │ SpriteBatch      │
//!  │ position +   ├──►│  fill defaults, pick origin,├──►│  queue command,  │
//!  │ DrawOptions  │   │  repeat for outlines        │   │  flush later     │
//!  └──────────────┘   └─────────────────────────────┘   └──────────────────┘
//! ```
//!
//! The engine plugs in by implementing [`SpriteBatch`]. Each call to
//! [`SpriteBatch::draw`] carries one [`SpriteCommand`]: texture, destination,
//! source rectangle, tint, rotation, origin, scale, mirroring and layer depth.
//! Culling, sorting, batching by texture and GPU submission all stay on the
//! engine side.
//!
//! ## Comparison
//!
//! - **MonoGame / XNA**: `SpriteBatch.Draw` takes the same nine parameters
//!   positionally, with a long list of overloads for the common subsets.
//! - **Macroquad**: `draw_texture_ex` with a `DrawTextureParams` struct; the
//!   same "one call, options value with defaults" shape used here.
//! - **Bevy**: sprites are ECS components collected once per frame; no
//!   immediate-mode draw call at all.

mod draw;

pub use draw::{
    DrawOptions, DrawRegionExt, OUTLINE_OFFSETS, draw_region, draw_region_centered,
    draw_region_outlined, draw_region_outlined_centered,
};

use crate::math::{IRect, Vec2};
use crate::texture::Texture;

/// An engine's batched sprite renderer.
///
/// `draw` only queues; when the batch flushes is up to the engine.
pub trait SpriteBatch {
    type Texture: Texture;

    fn draw(&mut self, texture: &Self::Texture, command: &SpriteCommand);
}

/// One fully-resolved sprite draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteCommand {
    /// Destination position in world/screen units.
    pub position: Vec2,
    /// Source rectangle in texture pixel space.
    pub source: IRect,
    /// Tint color multiplied with the texture sample.
    pub color: Color,
    /// Rotation in radians around `origin`.
    pub rotation: f32,
    /// Anchor point, relative to the source rectangle's top-left corner.
    pub origin: Vec2,
    /// Per-axis scale.
    pub scale: Vec2,
    pub effects: SpriteEffects,
    pub layer_depth: f32,
}

/// Mirroring flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteEffects {
    /// Flip the sprite horizontally.
    pub flip_x: bool,
    /// Flip the sprite vertically.
    pub flip_y: bool,
}

impl SpriteEffects {
    pub const NONE: Self = Self {
        flip_x: false,
        flip_y: false,
    };
    pub const FLIP_HORIZONTALLY: Self = Self {
        flip_x: true,
        flip_y: false,
    };
    pub const FLIP_VERTICALLY: Self = Self {
        flip_x: false,
        flip_y: true,
    };
    pub const BOTH: Self = Self {
        flip_x: true,
        flip_y: true,
    };
}

/// An RGBA color with floating-point components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const RED: Self = Self { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const GREEN: Self = Self { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };
    pub const BLUE: Self = Self { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Create a color from RGB (alpha = 1).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// `true` when alpha is 1. Outlines only look solid with opaque colors.
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_defaults_to_white() {
        assert_eq!(Color::default(), Color::WHITE);
        assert_eq!(Color::rgb(0.5, 0.25, 1.0).to_array(), [0.5, 0.25, 1.0, 1.0]);
    }

    #[test]
    fn opacity() {
        assert!(Color::RED.is_opaque());
        assert!(!Color::rgba(1.0, 0.0, 0.0, 0.5).is_opaque());
        assert!(!Color::TRANSPARENT.is_opaque());
    }

    #[test]
    fn effects_flags() {
        assert_eq!(SpriteEffects::default(), SpriteEffects::NONE);
        assert_eq!(
            SpriteEffects::BOTH,
            SpriteEffects {
                flip_x: true,
                flip_y: true
            }
        );
        assert_eq!(
            SpriteEffects::FLIP_VERTICALLY,
            SpriteEffects {
                flip_x: false,
                flip_y: true
            }
        );
    }
}
