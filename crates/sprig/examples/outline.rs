//! Outlined sprites — carve a frame from a sheet and draw it with the
//! offset-outline trick against a batch that just logs what it receives.
//!
//! Run with `RUST_LOG=info cargo run --example outline`.

use std::rc::Rc;

use sprig::prelude::*;

/// Stand-in for an engine texture.
struct SheetTexture {
    label: &'static str,
    width: u32,
    height: u32,
}

impl Texture for SheetTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl Drop for SheetTexture {
    fn drop(&mut self) {
        log::info!("released texture '{}'", self.label);
    }
}

/// Stand-in for an engine sprite batch.
#[derive(Default)]
struct LogBatch {
    queued: usize,
}

impl SpriteBatch for LogBatch {
    type Texture = SheetTexture;

    fn draw(&mut self, texture: &SheetTexture, command: &SpriteCommand) {
        self.queued += 1;
        log::info!(
            "draw {} src=({}, {}, {}x{}) at ({:.1}, {:.1}) origin=({:.1}, {:.1}) color={:?}",
            texture.label,
            command.source.x,
            command.source.y,
            command.source.width,
            command.source.height,
            command.position.x,
            command.position.y,
            command.origin.x,
            command.origin.y,
            command.color.to_array(),
        );
    }
}

fn main() {
    env_logger::init();

    let sheet = TextureRegion::new(Rc::new(SheetTexture {
        label: "hero.png",
        width: 128,
        height: 64,
    }));
    let mut idle = sheet.sub_region(0, 0, 32, 32);
    let mut run = sheet.sub_region(32, 0, 32, 32);
    drop(sheet);

    let mut batch = LogBatch::default();

    // Black outline behind a normal draw.
    batch.draw_region_outlined_with(
        &idle,
        Vec2::new(100.0, 100.0),
        &DrawOptions::new().color(Color::BLACK),
    );
    batch.draw_region(&idle, Vec2::new(100.0, 100.0));

    // Centered, mirrored and scaled up.
    batch.draw_region_centered_with(
        &run,
        Vec2::new(200.0, 100.0),
        &DrawOptions::new().scale(2.0).flip_x().layer_depth(0.5),
    );

    log::info!("queued {} sprite command(s)", batch.queued);

    // The sheet texture goes away only with the last region.
    idle.dispose();
    idle.dispose();
    run.dispose();
}
