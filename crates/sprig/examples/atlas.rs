//! Atlas lookup — load a JSON atlas descriptor and draw regions by name.
//!
//! Run with `RUST_LOG=debug cargo run --example atlas`.

use std::rc::Rc;

use sprig::prelude::*;

const ITEMS_JSON: &str = r#"{
    "name": "items",
    "regions": [
        { "name": "coin",   "x": 0,  "y": 0, "width": 16, "height": 16 },
        { "name": "gem",    "x": 16, "y": 0, "width": 16, "height": 16 },
        { "name": "potion", "x": 32, "y": 0, "width": 16, "height": 24 }
    ]
}"#;

struct ItemTexture;

impl Texture for ItemTexture {
    fn width(&self) -> u32 {
        64
    }

    fn height(&self) -> u32 {
        32
    }
}

#[derive(Default)]
struct CountingBatch {
    draws: usize,
}

impl SpriteBatch for CountingBatch {
    type Texture = ItemTexture;

    fn draw(&mut self, _texture: &ItemTexture, command: &SpriteCommand) {
        self.draws += 1;
        log::debug!("queued {:?}", command.source);
    }
}

fn main() -> Result<(), AtlasError> {
    env_logger::init();

    let descriptor = AtlasDescriptor::from_json(ITEMS_JSON)?;
    let items = TextureAtlas::from_descriptor(Rc::new(ItemTexture), &descriptor)?;

    let mut batch = CountingBatch::default();
    for (i, name) in ["coin", "gem", "potion", "sword"].iter().enumerate() {
        match items.region(name) {
            Some(region) => batch.draw_region(region, Vec2::new(i as f32 * 20.0, 0.0)),
            None => log::warn!("atlas '{}' has no region '{name}'", items.name()),
        }
    }

    let icons = TextureAtlas::from_grid(
        "icon",
        Rc::clone(items.texture()),
        GridLayout::new(8, 8).max_regions(4),
    )?;
    for (_, icon) in icons.iter() {
        batch.draw_region_outlined(icon, Vec2::ZERO);
    }

    log::info!("{} draw call(s) issued", batch.draws);
    Ok(())
}
