//! # Draw — Forwarding Regions to the Batch
//!
//! Every helper here is a pure translation: take a [`TextureRegion`], a
//! position and a [`DrawOptions`], and issue one (or nine) [`SpriteCommand`]s
//! to the engine's [`SpriteBatch`]. Nothing is cached between calls.
//!
//! | Helper                            | Origin                  | Calls |
//! |-----------------------------------|-------------------------|-------|
//! | [`draw_region`]                   | `options.origin`        | 1     |
//! | [`draw_region_centered`]          | region center           | 1     |
//! | [`draw_region_outlined`]          | `options.origin`        | 9     |
//! | [`draw_region_outlined_centered`] | region center           | 9     |
//!
//! ## Outline by Offset
//!
//! The outlined helpers draw the region eight extra times, shifted one unit
//! toward each neighbour, and then once more in place:
//!
//! ```text
//!   (-1,-1) (0,-1) (1,-1)
//!   (-1, 0)   ●    (1, 0)      ● = final, unshifted draw
//!   (-1, 1) (0, 1) (1, 1)
//! ```
//!
//! With an opaque tint this reads as a one-unit silhouette around the sprite.
//! It is an approximation, not edge detection: the nine draws overlap, so a
//! semi-transparent color blends with itself and the outline shows uneven,
//! darker seams. It also costs nine quads per sprite.

use crate::math::Vec2;
use crate::region::TextureRegion;
use crate::texture::Texture;

use super::{Color, SpriteBatch, SpriteCommand, SpriteEffects};

/// The eight one-unit neighbour offsets used for outlines, x-major.
pub const OUTLINE_OFFSETS: [Vec2; 8] = [
    Vec2::new(-1.0, -1.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
];

/// Everything about a draw except the region and where it goes.
///
/// Defaults: white tint, no rotation, origin at the top-left, unit scale,
/// no mirroring, layer depth 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOptions {
    /// Tint color multiplied with the texture sample.
    pub color: Color,
    /// Rotation in radians.
    pub rotation: f32,
    /// Anchor relative to the region's top-left. Ignored by the centered helpers.
    pub origin: Vec2,
    pub scale: Vec2,
    pub effects: SpriteEffects,
    pub layer_depth: f32,
}

impl DrawOptions {
    pub const fn new() -> Self {
        Self {
            color: Color::WHITE,
            rotation: 0.0,
            origin: Vec2::ZERO,
            scale: Vec2::ONE,
            effects: SpriteEffects::NONE,
            layer_depth: 0.0,
        }
    }

    /// Set the tint color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the rotation in radians.
    pub fn rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Uniform scale on both axes.
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Vec2::splat(scale);
        self
    }

    /// Per-axis scale.
    pub fn scale_xy(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn effects(mut self, effects: SpriteEffects) -> Self {
        self.effects = effects;
        self
    }

    /// Mirror horizontally.
    pub fn flip_x(mut self) -> Self {
        self.effects.flip_x = true;
        self
    }

    /// Mirror vertically.
    pub fn flip_y(mut self) -> Self {
        self.effects.flip_y = true;
        self
    }

    pub fn layer_depth(mut self, depth: f32) -> Self {
        self.layer_depth = depth;
        self
    }

    fn command<T: Texture>(
        &self,
        region: &TextureRegion<T>,
        position: Vec2,
        origin: Vec2,
    ) -> SpriteCommand {
        SpriteCommand {
            position,
            source: region.source_rect(),
            color: self.color,
            rotation: self.rotation,
            origin,
            scale: self.scale,
            effects: self.effects,
            layer_depth: self.layer_depth,
        }
    }
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw `region` at `position`, anchored at `options.origin`.
pub fn draw_region<B: SpriteBatch + ?Sized>(
    batch: &mut B,
    region: &TextureRegion<B::Texture>,
    position: Vec2,
    options: &DrawOptions,
) {
    submit(batch, region, position, options.origin, options);
}

/// Draw `region` at `position`, anchored at its center. `options.origin` is
/// ignored.
pub fn draw_region_centered<B: SpriteBatch + ?Sized>(
    batch: &mut B,
    region: &TextureRegion<B::Texture>,
    position: Vec2,
    options: &DrawOptions,
) {
    submit(batch, region, position, region.local_center(), options);
}

/// Draw `region` nine times to fake a one-unit outline. See the module docs
/// for the limitations.
pub fn draw_region_outlined<B: SpriteBatch + ?Sized>(
    batch: &mut B,
    region: &TextureRegion<B::Texture>,
    position: Vec2,
    options: &DrawOptions,
) {
    submit_outlined(batch, region, position, options.origin, options);
}

/// Outlined draw anchored at the region's center. `options.origin` is ignored.
pub fn draw_region_outlined_centered<B: SpriteBatch + ?Sized>(
    batch: &mut B,
    region: &TextureRegion<B::Texture>,
    position: Vec2,
    options: &DrawOptions,
) {
    submit_outlined(batch, region, position, region.local_center(), options);
}

fn submit<B: SpriteBatch + ?Sized>(
    batch: &mut B,
    region: &TextureRegion<B::Texture>,
    position: Vec2,
    origin: Vec2,
    options: &DrawOptions,
) {
    let Some(texture) = live_texture(region) else {
        return;
    };
    batch.draw(texture, &options.command(region, position, origin));
}

fn submit_outlined<B: SpriteBatch + ?Sized>(
    batch: &mut B,
    region: &TextureRegion<B::Texture>,
    position: Vec2,
    origin: Vec2,
    options: &DrawOptions,
) {
    let Some(texture) = live_texture(region) else {
        return;
    };
    for offset in OUTLINE_OFFSETS {
        batch.draw(texture, &options.command(region, position + offset, origin));
    }
    batch.draw(texture, &options.command(region, position, origin));
}

/// The region's texture, or `None` (after a debug assertion) if disposed.
fn live_texture<T: Texture>(region: &TextureRegion<T>) -> Option<&T> {
    debug_assert!(
        !region.is_disposed(),
        "cannot draw a disposed texture region"
    );
    match region.texture() {
        Some(texture) => Some(&**texture),
        None => {
            log::warn!(
                "skipping draw of disposed texture region {:?}",
                region.source_rect()
            );
            None
        }
    }
}

/// Method-call forms of the draw helpers, available on every [`SpriteBatch`].
///
/// The plain forms use [`DrawOptions::default`]; the `_with` forms take
/// explicit options.
///
/// ```ignore
/// batch.draw_region(&coin, Vec2::new(10.0, 20.0));
/// batch.draw_region_outlined_with(
///     &player,
///     pos,
///     &DrawOptions::new().color(Color::BLACK).scale(2.0),
/// );
/// ```
pub trait DrawRegionExt: SpriteBatch {
    fn draw_region(&mut self, region: &TextureRegion<Self::Texture>, position: Vec2) {
        draw_region(self, region, position, &DrawOptions::default());
    }

    fn draw_region_with(
        &mut self,
        region: &TextureRegion<Self::Texture>,
        position: Vec2,
        options: &DrawOptions,
    ) {
        draw_region(self, region, position, options);
    }

    fn draw_region_centered(&mut self, region: &TextureRegion<Self::Texture>, position: Vec2) {
        draw_region_centered(self, region, position, &DrawOptions::default());
    }

    fn draw_region_centered_with(
        &mut self,
        region: &TextureRegion<Self::Texture>,
        position: Vec2,
        options: &DrawOptions,
    ) {
        draw_region_centered(self, region, position, options);
    }

    fn draw_region_outlined(&mut self, region: &TextureRegion<Self::Texture>, position: Vec2) {
        draw_region_outlined(self, region, position, &DrawOptions::default());
    }

    fn draw_region_outlined_with(
        &mut self,
        region: &TextureRegion<Self::Texture>,
        position: Vec2,
        options: &DrawOptions,
    ) {
        draw_region_outlined(self, region, position, options);
    }

    fn draw_region_outlined_centered(
        &mut self,
        region: &TextureRegion<Self::Texture>,
        position: Vec2,
    ) {
        draw_region_outlined_centered(self, region, position, &DrawOptions::default());
    }

    fn draw_region_outlined_centered_with(
        &mut self,
        region: &TextureRegion<Self::Texture>,
        position: Vec2,
        options: &DrawOptions,
    ) {
        draw_region_outlined_centered(self, region, position, options);
    }
}

impl<B: SpriteBatch + ?Sized> DrawRegionExt for B {}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::math::IRect;
    use crate::testing::{RecordingBatch, TestTexture};

    fn region(width: u32, height: u32) -> TextureRegion<TestTexture> {
        TextureRegion::new(Rc::new(TestTexture::new(width, height)))
    }

    #[test]
    fn default_options() {
        let options = DrawOptions::default();
        assert_eq!(options.color, Color::WHITE);
        assert_eq!(options.rotation, 0.0);
        assert_eq!(options.origin, Vec2::ZERO);
        assert_eq!(options.scale, Vec2::ONE);
        assert_eq!(options.effects, SpriteEffects::NONE);
        assert_eq!(options.layer_depth, 0.0);
    }

    #[test]
    fn position_only_draw_uses_defaults() {
        let mut batch = RecordingBatch::default();
        let coin = region(16, 8);
        batch.draw_region(&coin, Vec2::new(3.0, 4.0));

        assert_eq!(batch.commands.len(), 1);
        assert_eq!(batch.textures, vec![(16, 8)]);
        assert_eq!(
            batch.commands[0],
            SpriteCommand {
                position: Vec2::new(3.0, 4.0),
                source: IRect::new(0, 0, 16, 8),
                color: Color::WHITE,
                rotation: 0.0,
                origin: Vec2::ZERO,
                scale: Vec2::ONE,
                effects: SpriteEffects::NONE,
                layer_depth: 0.0,
            }
        );
    }

    #[test]
    fn options_are_forwarded() {
        let mut batch = RecordingBatch::default();
        let sheet = region(64, 64);
        let frame = sheet.sub_region(16, 0, 16, 16);
        let options = DrawOptions::new()
            .color(Color::BLUE)
            .rotation(1.5)
            .origin(Vec2::new(2.0, 3.0))
            .scale(2.0)
            .flip_x()
            .layer_depth(0.25);

        draw_region(&mut batch, &frame, Vec2::new(100.0, 50.0), &options);

        let cmd = batch.commands[0];
        assert_eq!(cmd.source, IRect::new(16, 0, 16, 16));
        assert_eq!(cmd.color, Color::BLUE);
        assert_eq!(cmd.rotation, 1.5);
        assert_eq!(cmd.origin, Vec2::new(2.0, 3.0));
        assert_eq!(cmd.scale, Vec2::new(2.0, 2.0));
        assert_eq!(cmd.effects, SpriteEffects::FLIP_HORIZONTALLY);
        assert_eq!(cmd.layer_depth, 0.25);
        // Parent texture, not a copy.
        assert_eq!(batch.textures, vec![(64, 64)]);
    }

    #[test]
    fn per_axis_scale() {
        let options = DrawOptions::new().scale_xy(Vec2::new(2.0, -1.0)).flip_y();
        assert_eq!(options.scale, Vec2::new(2.0, -1.0));
        assert_eq!(options.effects, SpriteEffects::FLIP_VERTICALLY);
    }

    #[test]
    fn centered_overrides_origin() {
        let mut batch = RecordingBatch::default();
        let full = region(64, 64);
        let options = DrawOptions::new().origin(Vec2::new(7.0, 9.0));

        draw_region_centered(&mut batch, &full, Vec2::ZERO, &options);
        batch.draw_region_centered(&full, Vec2::ZERO);

        assert_eq!(batch.commands.len(), 2);
        for cmd in &batch.commands {
            assert_eq!(cmd.origin, Vec2::new(32.0, 32.0));
        }
    }

    #[test]
    fn centered_sub_region_uses_its_own_size() {
        let mut batch = RecordingBatch::default();
        let sheet = region(128, 128);
        let frame = sheet.sub_region(64, 32, 20, 10);
        batch.draw_region_centered(&frame, Vec2::new(1.0, 1.0));
        assert_eq!(batch.commands[0].origin, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn outlined_issues_nine_draws() {
        let mut batch = RecordingBatch::default();
        let sprite = region(32, 32);
        let options = DrawOptions::new().color(Color::RED);

        draw_region_outlined(&mut batch, &sprite, Vec2::new(5.0, 5.0), &options);

        assert_eq!(batch.commands.len(), 9);
        let mut positions: Vec<(i32, i32)> = batch
            .commands
            .iter()
            .map(|c| (c.position.x as i32, c.position.y as i32))
            .collect();
        // Unshifted draw goes last, on top.
        assert_eq!(positions.last(), Some(&(5, 5)));

        positions.sort();
        let mut expected = Vec::new();
        for x in 4..=6 {
            for y in 4..=6 {
                expected.push((x, y));
            }
        }
        assert_eq!(positions, expected);

        for cmd in &batch.commands {
            assert_eq!(cmd.color, Color::RED);
            assert_eq!(cmd.origin, Vec2::ZERO);
        }
    }

    #[test]
    fn outline_offsets_cover_neighbours() {
        assert!(!OUTLINE_OFFSETS.contains(&Vec2::ZERO));
        for offset in OUTLINE_OFFSETS {
            assert!(offset.x.abs() <= 1.0 && offset.y.abs() <= 1.0);
        }
        let mut unique = OUTLINE_OFFSETS.map(|o| (o.x as i32, o.y as i32)).to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn outlined_centered() {
        let mut batch = RecordingBatch::default();
        let sprite = region(10, 20);
        let options = DrawOptions::new().origin(Vec2::new(100.0, 100.0));
        batch.draw_region_outlined_centered_with(&sprite, Vec2::ZERO, &options);

        assert_eq!(batch.commands.len(), 9);
        for cmd in &batch.commands {
            assert_eq!(cmd.origin, Vec2::new(5.0, 10.0));
        }
    }

    #[test]
    fn ext_forms_match_free_functions() {
        let sprite = region(8, 8);
        let options = DrawOptions::new().color(Color::GREEN).rotation(0.5);

        let mut a = RecordingBatch::default();
        a.draw_region_with(&sprite, Vec2::ONE, &options);
        a.draw_region_centered_with(&sprite, Vec2::ONE, &options);
        a.draw_region_outlined_with(&sprite, Vec2::ONE, &options);
        a.draw_region_outlined(&sprite, Vec2::ONE);
        a.draw_region_outlined_centered(&sprite, Vec2::ONE);

        let mut b = RecordingBatch::default();
        draw_region(&mut b, &sprite, Vec2::ONE, &options);
        draw_region_centered(&mut b, &sprite, Vec2::ONE, &options);
        draw_region_outlined(&mut b, &sprite, Vec2::ONE, &options);
        draw_region_outlined(&mut b, &sprite, Vec2::ONE, &DrawOptions::default());
        draw_region_outlined_centered(&mut b, &sprite, Vec2::ONE, &DrawOptions::default());

        assert_eq!(a.commands, b.commands);
        assert_eq!(a.commands.len(), 1 + 1 + 9 + 9 + 9);
    }

    #[test]
    fn calls_are_independent() {
        let mut batch = RecordingBatch::default();
        let sprite = region(4, 4);
        batch.draw_region_with(&sprite, Vec2::ZERO, &DrawOptions::new().rotation(3.0));
        batch.draw_region(&sprite, Vec2::ZERO);
        assert_eq!(batch.commands[1].rotation, 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "disposed texture region")]
    fn drawing_disposed_region_panics_in_debug() {
        let mut batch = RecordingBatch::default();
        let mut sprite = region(4, 4);
        sprite.dispose();
        batch.draw_region(&sprite, Vec2::ZERO);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn drawing_disposed_region_is_skipped_in_release() {
        let mut batch = RecordingBatch::default();
        let mut sprite = region(4, 4);
        sprite.dispose();
        batch.draw_region(&sprite, Vec2::ZERO);
        batch.draw_region_outlined(&sprite, Vec2::ZERO);
        assert!(batch.commands.is_empty());
    }
}
