//! # Texture — The Engine's Image Resource
//!
//! Sprig never loads or uploads textures itself. The host engine owns that
//! (decoding PNGs, creating GPU objects, bind groups). This module only
//! describes what sprig needs to know about a texture, through the [`Texture`]
//! trait: its pixel dimensions and bounds.
//!
//! ## Shared Ownership
//!
//! Many regions usually point at one texture: an atlas of 200 frames is 200
//! regions over a single image. If each region could release the texture on
//! its own, disposing one frame would pull the image out from under the other
//! 199. Regions therefore hold a [`SharedTexture`], a reference-counted handle:
//!
//! ```text
//!   TextureRegion "idle_0" ──┐
//!   TextureRegion "idle_1" ──┼──► Rc<EngineTexture>  (strong count = 3)
//!   TextureRegion "run_0"  ──┘
//!
//!   dispose("idle_0")  → strong count = 2, texture alive
//!   dispose("idle_1")  → strong count = 1, texture alive
//!   dispose("run_0")   → strong count = 0, EngineTexture::drop runs once
//! ```
//!
//! Releasing the GPU resource is the implementor's `Drop`. It runs exactly
//! once, when the last holder lets go.
//!
//! ## Comparison
//!
//! - **Index handles** (a `TextureHandle(usize)` into a store): cheap to copy,
//!   but the store decides when entries die, so lifetime is manual.
//! - **Bevy** (`Handle<Image>`): reference-counted handles into a global asset
//!   store, freed when the last strong handle drops. Same idea as here.
//! - **MonoGame**: `Texture2D.Dispose()` frees immediately, regardless of how
//!   many regions still reference the texture.

use std::rc::Rc;

use crate::math::IRect;

/// A texture resource owned by the host engine.
pub trait Texture {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// The full pixel bounds, `(0, 0, width, height)`. Dimensions above
    /// `i32::MAX` saturate.
    fn bounds(&self) -> IRect {
        let width = i32::try_from(self.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height()).unwrap_or(i32::MAX);
        IRect::new(0, 0, width, height)
    }
}

/// Shared handle to an engine texture. Regions clone this; the texture is
/// dropped when the last clone goes away.
pub type SharedTexture<T> = Rc<T>;

impl<T: Texture + ?Sized> Texture for Rc<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn bounds(&self) -> IRect {
        (**self).bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestTexture;

    #[test]
    fn default_bounds() {
        let texture = TestTexture::new(100, 200);
        assert_eq!(texture.bounds(), IRect::new(0, 0, 100, 200));
    }

    #[test]
    fn oversized_bounds_saturate() {
        let texture = TestTexture::new(3_000_000_000, 10);
        assert_eq!(texture.bounds(), IRect::new(0, 0, i32::MAX, 10));
    }

    #[test]
    fn shared_handle_forwards() {
        let texture: SharedTexture<TestTexture> = Rc::new(TestTexture::new(64, 32));
        assert_eq!(Texture::width(&texture), 64);
        assert_eq!(Texture::height(&texture), 32);
    }
}
