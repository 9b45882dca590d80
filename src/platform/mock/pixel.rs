//! Mock pixel strip implementation for testing

use crate::platform::{
    error::{PixelError, PlatformError},
    traits::PixelStripInterface,
    Result,
};
use std::vec::Vec;

/// Mock pixel strip implementation
///
/// Keeps separate staged and committed buffers so tests can verify that
/// pixel writes are not observable until `show` latches them.
#[derive(Debug)]
pub struct MockPixelStrip {
    staged: Vec<[u8; 3]>,
    committed: Vec<[u8; 3]>,
    show_count: usize,
}

impl MockPixelStrip {
    /// Create a strip of `len` pixels, all black
    pub fn new(len: usize) -> Self {
        let mut staged = Vec::new();
        staged.resize(len, [0u8; 3]);
        Self {
            committed: staged.clone(),
            staged,
            show_count: 0,
        }
    }

    /// Pixels as last latched by `show`
    pub fn committed(&self) -> &[[u8; 3]] {
        &self.committed
    }

    /// Number of times `show` has been called
    pub fn show_count(&self) -> usize {
        self.show_count
    }
}

impl PixelStripInterface for MockPixelStrip {
    fn len(&self) -> usize {
        self.staged.len()
    }

    fn set_pixel(&mut self, index: usize, rgb: [u8; 3]) -> Result<()> {
        if index >= self.staged.len() {
            return Err(PlatformError::Pixel(PixelError::InvalidIndex));
        }
        self.staged[index] = rgb;
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        self.committed.copy_from_slice(&self.staged);
        self.show_count += 1;
        Ok(())
    }
}
