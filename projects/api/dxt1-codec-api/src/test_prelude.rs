//! Test prelude for DXT1 API tests.
//!
//! Common test utilities used across multiple test modules.

pub use crate::{Dxt1Error, Execution};
pub use dxt1_codec::DXT1_BLOCK_SIZE;
pub use rstest::rstest;

/// Routes `log` output to the test harness. Safe to call from every test.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A `width` x `height` RGBA8888 image filled with one pixel.
pub fn solid_image(width: usize, height: usize, pixel: [u8; 4]) -> Vec<u8> {
    pixel.iter().copied().cycle().take(width * height * 4).collect()
}

/// `len` bytes from a multiplicative hash of the byte position.
pub fn pseudo_random_bytes(seed: u32, len: usize) -> Vec<u8> {
    (0..len as u32)
        .map(|i| (i.wrapping_add(seed).wrapping_mul(0x9E37_79B9) >> 24) as u8)
        .collect()
}

/// An RGBA8888 image of pseudo-random pixels.
pub fn noise_image(width: usize, height: usize, seed: u32) -> Vec<u8> {
    pseudo_random_bytes(seed, width * height * 4)
}

/// `num_blocks` pseudo-random DXT1 blocks.
pub fn random_dxt1_image(seed: u32, num_blocks: usize) -> Vec<u8> {
    pseudo_random_bytes(seed, num_blocks * DXT1_BLOCK_SIZE)
}
