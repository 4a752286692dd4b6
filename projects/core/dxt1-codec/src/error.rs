//! Validation errors raised at the image boundary.
//!
//! The per-block functions never fail; everything that can go wrong with caller supplied
//! buffers is checked once, before the grid loop starts.

use thiserror::Error;

/// Identifies which caller buffer failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// The DXT1 data (8 bytes per block).
    Compressed,
    /// The RGBA8888 pixel data (4 bytes per pixel).
    Pixels,
}

impl core::fmt::Display for BufferKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferKind::Compressed => f.write_str("compressed"),
            BufferKind::Pixels => f.write_str("pixel"),
        }
    }
}

/// Validation errors for DXT1 image operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Dxt1ValidationError {
    /// Width or height is zero or not a multiple of 4.
    #[error("Invalid image dimensions: {width}x{height} (both must be positive multiples of 4)")]
    InvalidDimensions {
        /// The image width in pixels.
        width: usize,
        /// The image height in pixels.
        height: usize,
    },

    /// A buffer is shorter than the size implied by the image dimensions.
    #[error("The {buffer} buffer is too small: needed {needed} bytes, got {actual}")]
    BufferTooSmall {
        /// The buffer that is too small.
        buffer: BufferKind,
        /// The required buffer size.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },
}
