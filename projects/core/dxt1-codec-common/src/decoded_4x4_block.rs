//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure for representing the 4x4 pixel
//! blocks DXT1 operates on, both before encoding and after decoding.
//!
//! ## Usage
//!
//! ```
//! use dxt1_codec_common::color_8888::Color8888;
//! use dxt1_codec_common::decoded_4x4_block::Decoded4x4Block;
//!
//! // Create a block filled with red pixels
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let block = Decoded4x4Block::new(red_pixel);
//!
//! assert!(block.has_identical_pixels());
//! assert_eq!(block.get_pixel(3, 3), red_pixel);
//! ```
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```

use crate::color_8888::Color8888;

/// Size of a 4x4 block of RGBA8888 pixels, in bytes.
pub const BLOCK_RGBA_BYTES: usize = 64;

/// Represents a 4x4 block of RGBA8888 pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Constructs a new block initialised with 16 copies of the provided pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt1_codec_common::color_8888::Color8888;
    /// use dxt1_codec_common::decoded_4x4_block::Decoded4x4Block;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// let block = Decoded4x4Block::new(pixel);
    /// assert!(block.pixels.iter().all(|&p| p == pixel));
    /// ```
    #[inline]
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Builds a block from 64 contiguous bytes in RGBA order.
    #[inline]
    pub fn from_rgba_bytes(bytes: &[u8; BLOCK_RGBA_BYTES]) -> Self {
        Self {
            pixels: core::array::from_fn(|i| {
                Color8888::new(
                    bytes[i * 4],
                    bytes[i * 4 + 1],
                    bytes[i * 4 + 2],
                    bytes[i * 4 + 3],
                )
            }),
        }
    }

    /// Returns the block as 64 contiguous bytes in RGBA order.
    #[inline]
    pub fn to_rgba_bytes(&self) -> [u8; BLOCK_RGBA_BYTES] {
        let mut bytes = [0u8; BLOCK_RGBA_BYTES];
        for (chunk, pixel) in bytes.chunks_exact_mut(4).zip(self.pixels.iter()) {
            chunk.copy_from_slice(&pixel.to_bytes());
        }
        bytes
    }

    /// Gets the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If `y * 4 + x` is not below 16.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color8888 {
        self.pixels[y * 4 + x]
    }

    /// Sets the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If `y * 4 + x` is not below 16.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Color8888) {
        self.pixels[y * 4 + x] = pixel;
    }

    /// Checks if all pixels in the block have the same color values
    #[inline]
    pub fn has_identical_pixels(&self) -> bool {
        let first = self.pixels[0];
        self.pixels.iter().all(|pixel| *pixel == first)
    }
}

impl Default for Decoded4x4Block {
    fn default() -> Self {
        Self::new(Color8888::default())
    }
}
