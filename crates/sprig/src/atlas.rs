//! # Atlas — Named Regions Over One Texture
//!
//! A texture atlas is a single image holding many sprites. [`TextureAtlas`]
//! keeps a list of named [`TextureRegion`]s that all share the atlas texture,
//! so frames can be looked up by name (`"coin"`, `"hero_run3"`) or by index.
//!
//! Regions come from three places:
//!
//! - [`TextureAtlas::create_region`]: one rectangle at a time.
//! - [`TextureAtlas::from_grid`]: slice a uniform grid, row-major.
//! - [`TextureAtlas::from_descriptor`]: a JSON [`AtlasDescriptor`], usually
//!   written by an external packing tool.
//!
//! ```text
//!  from_grid(tile 16x16, margin 1, spacing 2)
//!  ┌─────────────────────────────────────┐
//!  │ m                                   │
//!  │  ┌──────┐ s ┌──────┐ s ┌──────┐     │   frame index = row * columns + column
//!  │  │  0   │   │  1   │   │  2   │     │   names: "{atlas}0", "{atlas}1", ...
//!  │  └──────┘   └──────┘   └──────┘     │
//!  │     s                               │   tiles cut off by the edge are skipped
//!  │  ┌──────┐   ┌──────┐   ┌──────┐     │
//!  │  │  3   │   │  4   │   │  5   │     │
//!  │  └──────┘   └──────┘   └──────┘     │
//!  └─────────────────────────────────────┘
//! ```
//!
//! The atlas does not pack images; it only describes where they already are.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::IRect;
use crate::region::{RegionError, TextureRegion};
use crate::texture::{SharedTexture, Texture};

/// How to slice a texture into a uniform grid of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Width of one tile in pixels.
    pub tile_width: u32,
    /// Height of one tile in pixels.
    pub tile_height: u32,
    /// Border around the whole grid in pixels.
    pub margin: u32,
    /// Gap between neighbouring tiles in pixels.
    pub spacing: u32,
    /// Stop after this many tiles.
    pub max_regions: Option<usize>,
}

impl GridLayout {
    /// Tightly packed tiles, no margin or spacing.
    pub fn new(tile_width: u32, tile_height: u32) -> Self {
        Self {
            tile_width,
            tile_height,
            margin: 0,
            spacing: 0,
            max_regions: None,
        }
    }

    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn max_regions(mut self, max: usize) -> Self {
        self.max_regions = Some(max);
        self
    }
}

/// A set of named regions sharing one texture.
pub struct TextureAtlas<T: Texture> {
    name: String,
    texture: SharedTexture<T>,
    regions: Vec<(String, TextureRegion<T>)>,
    index: HashMap<String, usize>,
}

impl<T: Texture> TextureAtlas<T> {
    /// An empty atlas over `texture`.
    pub fn new(name: impl Into<String>, texture: SharedTexture<T>) -> Self {
        Self {
            name: name.into(),
            texture,
            regions: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Slice `texture` into a grid of equally sized tiles.
    pub fn from_grid(
        name: impl Into<String>,
        texture: SharedTexture<T>,
        layout: GridLayout,
    ) -> Result<Self, AtlasError> {
        if layout.tile_width == 0 || layout.tile_height == 0 {
            return Err(AtlasError::InvalidTileSize {
                width: layout.tile_width,
                height: layout.tile_height,
            });
        }

        let mut atlas = Self::new(name, texture);
        let bounds = atlas.texture.bounds();
        let (tile_w, tile_h) = (layout.tile_width as i64, layout.tile_height as i64);
        let (margin, spacing) = (layout.margin as i64, layout.spacing as i64);
        let max = layout.max_regions.unwrap_or(usize::MAX);

        let mut y = margin;
        'rows: while y + tile_h <= bounds.height as i64 - margin {
            let mut x = margin;
            while x + tile_w <= bounds.width as i64 - margin {
                if atlas.len() >= max {
                    break 'rows;
                }
                let name = format!("{}{}", atlas.name, atlas.len());
                let rect = IRect::new(x as i32, y as i32, tile_w as i32, tile_h as i32);
                atlas.create_region(name, rect)?;
                x += tile_w + spacing;
            }
            y += tile_h + spacing;
        }

        log::debug!(
            "sliced atlas '{}' into {} tile(s) of {}x{}",
            atlas.name,
            atlas.len(),
            tile_w,
            tile_h
        );
        Ok(atlas)
    }

    /// Build an atlas from a descriptor. Every rectangle must lie fully inside
    /// the texture; nothing is clamped.
    pub fn from_descriptor(
        texture: SharedTexture<T>,
        descriptor: &AtlasDescriptor,
    ) -> Result<Self, AtlasError> {
        let mut atlas = Self::new(descriptor.name.clone(), texture);
        let root = TextureRegion::from_texture(&atlas.texture);

        for entry in &descriptor.regions {
            let region = root
                .try_sub_region(entry.rect())
                .map_err(|source| AtlasError::Region {
                    name: entry.name.clone(),
                    source,
                })?;
            atlas.insert(entry.name.clone(), region)?;
        }

        log::debug!(
            "loaded atlas '{}' with {} region(s)",
            atlas.name,
            atlas.len()
        );
        Ok(atlas)
    }

    /// Carve a named region from the atlas texture. `rect` is clamped to the
    /// texture like [`TextureRegion::sub_region_rect`], and must have a
    /// non-negative offset and positive size.
    pub fn create_region(
        &mut self,
        name: impl Into<String>,
        rect: IRect,
    ) -> Result<&TextureRegion<T>, AtlasError> {
        let region = TextureRegion::from_texture(&self.texture).sub_region_rect(rect);
        let index = self.insert(name.into(), region)?;
        Ok(&self.regions[index].1)
    }

    fn insert(&mut self, name: String, region: TextureRegion<T>) -> Result<usize, AtlasError> {
        if self.index.contains_key(&name) {
            return Err(AtlasError::DuplicateRegion(name));
        }
        let index = self.regions.len();
        self.index.insert(name.clone(), index);
        self.regions.push((name, region));
        Ok(index)
    }

    /// Remove a region by name. Later regions shift down by one index.
    pub fn remove_region(&mut self, name: &str) -> Option<TextureRegion<T>> {
        let index = self.index.remove(name)?;
        let (_, region) = self.regions.remove(index);
        for slot in self.index.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(region)
    }

    pub fn region(&self, name: &str) -> Option<&TextureRegion<T>> {
        self.index_of(name).map(|i| &self.regions[i].1)
    }

    pub fn region_at(&self, index: usize) -> Option<&TextureRegion<T>> {
        self.regions.get(index).map(|(_, region)| region)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture(&self) -> &SharedTexture<T> {
        &self.texture
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TextureRegion<T>)> {
        self.regions
            .iter()
            .map(|(name, region)| (name.as_str(), region))
    }

    /// Describe the current regions, relative to the texture bounds.
    pub fn descriptor(&self) -> AtlasDescriptor {
        let bounds = self.texture.bounds();
        AtlasDescriptor {
            name: self.name.clone(),
            regions: self
                .iter()
                .map(|(name, region)| {
                    let rect = region.source_rect();
                    RegionDescriptor {
                        name: name.to_owned(),
                        x: rect.x - bounds.x,
                        y: rect.y - bounds.y,
                        width: rect.width,
                        height: rect.height,
                    }
                })
                .collect(),
        }
    }
}

impl<T: Texture> fmt::Debug for TextureAtlas<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureAtlas")
            .field("name", &self.name)
            .field("regions", &self.regions)
            .finish()
    }
}

// ── Descriptor ──────────────────────────────────────────────────────────

/// Serialized form of an atlas: a name and a list of named rectangles in
/// texture pixel space.
///
/// ```json
/// {
///   "name": "items",
///   "regions": [
///     { "name": "coin", "x": 0, "y": 0, "width": 16, "height": 16 },
///     { "name": "gem",  "x": 16, "y": 0, "width": 16, "height": 16 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    pub name: String,
    #[serde(default)]
    pub regions: Vec<RegionDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDescriptor {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RegionDescriptor {
    pub fn rect(&self) -> IRect {
        IRect::new(self.x, self.y, self.width, self.height)
    }
}

impl AtlasDescriptor {
    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, AtlasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ── Errors ──────────────────────────────────────────────────────────────

/// Errors that can occur while building an atlas.
#[derive(Debug)]
pub enum AtlasError {
    /// The descriptor JSON was malformed.
    Parse(serde_json::Error),
    /// Two regions share a name.
    DuplicateRegion(String),
    /// A grid tile has zero width or height.
    InvalidTileSize { width: u32, height: u32 },
    /// A descriptor rectangle was rejected.
    Region { name: String, source: RegionError },
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::Parse(e) => write!(f, "atlas descriptor parse failed: {e}"),
            AtlasError::DuplicateRegion(name) => {
                write!(f, "atlas already has a region named '{name}'")
            }
            AtlasError::InvalidTileSize { width, height } => {
                write!(f, "atlas tile size {width}x{height} must be non-zero")
            }
            AtlasError::Region { name, source } => write!(f, "atlas region '{name}': {source}"),
        }
    }
}

impl std::error::Error for AtlasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AtlasError::Parse(e) => Some(e),
            AtlasError::Region { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AtlasError {
    fn from(e: serde_json::Error) -> Self {
        AtlasError::Parse(e)
    }
}
