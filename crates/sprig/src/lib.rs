//! # Sprig — Texture Regions for Batched Sprite Renderers
//!
//! A thin layer over an existing 2D sprite batch: a [`TextureRegion`] value
//! type describing a rectangular slice of a larger texture, and a handful of
//! draw helpers that forward a region to the engine's batched renderer with
//! sensible defaults.
//!
//! Start with `use sprig::prelude::*`, implement [`SpriteBatch`] and
//! [`Texture`] for your engine's types, and draw with
//! [`DrawRegionExt`](render2d::DrawRegionExt).
//!
//! [`TextureRegion`]: region::TextureRegion
//! [`SpriteBatch`]: render2d::SpriteBatch
//! [`Texture`]: texture::Texture

pub mod math;
pub mod prelude;
pub mod region;
pub mod render2d;
pub mod texture;

#[cfg(feature = "atlas")]
pub mod atlas;

#[cfg(test)]
pub(crate) mod testing;
