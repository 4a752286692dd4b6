//! Common test imports and utilities for DXT1 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::block::*;
pub use crate::error::{BufferKind, Dxt1ValidationError};
pub use crate::image::*;

// Common types from dxt1_codec_common
pub use dxt1_codec_common::color_565::Color565;
pub use dxt1_codec_common::color_8888::Color8888;
pub use dxt1_codec_common::decoded_4x4_block::Decoded4x4Block;

/// Small xorshift generator; deterministic test data without pulling in `rand`.
pub(crate) struct XorShift32(u32);

impl XorShift32 {
    pub(crate) fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift.
        Self(seed.max(1))
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    pub(crate) fn next_u8(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }
}

/// Generates `num_blocks` blocks of random DXT1 data.
pub(crate) fn generate_random_blocks(seed: u32, num_blocks: usize) -> Vec<[u8; 8]> {
    let mut rng = XorShift32::new(seed);
    (0..num_blocks)
        .map(|_| core::array::from_fn(|_| rng.next_u8()))
        .collect()
}

/// Generates a block of random opaque pixels.
pub(crate) fn generate_noise_block(seed: u32) -> Decoded4x4Block {
    let mut rng = XorShift32::new(seed);
    Decoded4x4Block {
        pixels: core::array::from_fn(|_| {
            Color8888::new(rng.next_u8(), rng.next_u8(), rng.next_u8(), 255)
        }),
    }
}

/// Generates a block with a diagonal gradient, offset by `start`.
pub(crate) fn generate_gradient_block(start: u8) -> Decoded4x4Block {
    Decoded4x4Block {
        pixels: core::array::from_fn(|i| {
            let step = (i as u8).wrapping_mul(16);
            Color8888::new(
                start.wrapping_add(step),
                start.wrapping_add(step / 2),
                255u8.wrapping_sub(step),
                255,
            )
        }),
    }
}

/// Generates a `width` x `height` RGBA8888 image where every byte is derived from its position.
pub(crate) fn generate_gradient_image(width: usize, height: usize) -> Vec<u8> {
    let mut image = vec![0u8; width * height * 4];
    for (i, pixel) in image.chunks_exact_mut(4).enumerate() {
        let (x, y) = (i % width, i / width);
        pixel.copy_from_slice(&[
            (x * 16) as u8,
            (y * 16) as u8,
            (x * 7 + y * 13) as u8,
            255,
        ]);
    }
    image
}
