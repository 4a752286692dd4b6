#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod block;
pub mod error;
pub mod image;
pub mod util;

pub use block::*;
pub use error::{BufferKind, Dxt1ValidationError};
pub use image::*;

// Re-export the shared primitives for convenience
pub use dxt1_codec_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
