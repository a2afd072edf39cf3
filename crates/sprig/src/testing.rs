//! Shared fixtures for unit tests: a texture that counts its releases and a
//! sprite batch that records every command it receives.

use std::cell::Cell;
use std::rc::Rc;

use crate::render2d::{SpriteBatch, SpriteCommand};
use crate::texture::Texture;

/// A fake engine texture. `released` is bumped when the texture is dropped.
pub(crate) struct TestTexture {
    width: u32,
    height: u32,
    released: Rc<Cell<u32>>,
}

impl TestTexture {
    pub fn new(width: u32, height: u32) -> Self {
        Self::tracked(width, height).0
    }

    /// Create a texture along with a counter of how many times it was released.
    pub fn tracked(width: u32, height: u32) -> (Self, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        let texture = Self {
            width,
            height,
            released: released.clone(),
        };
        (texture, released)
    }
}

impl Texture for TestTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl Drop for TestTexture {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

/// A sprite batch that keeps every queued command.
#[derive(Default)]
pub(crate) struct RecordingBatch {
    pub commands: Vec<SpriteCommand>,
    /// `(width, height)` of the texture passed with each command.
    pub textures: Vec<(u32, u32)>,
}

impl SpriteBatch for RecordingBatch {
    type Texture = TestTexture;

    fn draw(&mut self, texture: &TestTexture, command: &SpriteCommand) {
        self.textures.push((texture.width, texture.height));
        self.commands.push(*command);
    }
}
