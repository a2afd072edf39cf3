//! Convenience re-exports. `use sprig::prelude::*` brings in everything
//! needed to carve regions and draw them.

pub use crate::math::{IRect, Rect, Vec2};
pub use crate::region::{RegionError, TextureRegion};
pub use crate::render2d::{
    Color, DrawOptions, DrawRegionExt, SpriteBatch, SpriteCommand, SpriteEffects,
};
pub use crate::texture::{SharedTexture, Texture};

#[cfg(feature = "atlas")]
pub use crate::atlas::{AtlasDescriptor, AtlasError, GridLayout, TextureAtlas};
