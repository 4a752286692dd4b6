//! Error types for DXT1 image operations.

use dxt1_codec::{BufferKind, Dxt1ValidationError};
use thiserror::Error;

/// Errors that can occur when compressing or decompressing a DXT1 image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Dxt1Error {
    /// Width or height is zero, or not a multiple of 4.
    #[error("Invalid image dimensions: {width}x{height}. Both must be non-zero multiples of 4.")]
    InvalidDimensions {
        /// The requested width in pixels
        width: usize,
        /// The requested height in pixels
        height: usize,
    },

    /// A buffer is shorter than the image dimensions require.
    #[error("{buffer} buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    BufferTooSmall {
        /// Which buffer was too small
        buffer: BufferKind,
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },
}

impl From<Dxt1ValidationError> for Dxt1Error {
    fn from(error: Dxt1ValidationError) -> Self {
        match error {
            Dxt1ValidationError::InvalidDimensions { width, height } => {
                Dxt1Error::InvalidDimensions { width, height }
            }
            Dxt1ValidationError::BufferTooSmall {
                buffer,
                needed,
                actual,
            } => Dxt1Error::BufferTooSmall {
                buffer,
                needed,
                actual,
            },
        }
    }
}
