//! Little-endian cursor writers.
//!
//! Each writer stores a value at `offset` and returns the offset just past it, so consecutive
//! writes chain without a mutable pointer:
//!
//! ```
//! use dxt1_codec::util::{write_u16_le, write_u32_le};
//!
//! let mut block = [0u8; 8];
//! let mut offset = 0;
//! offset = write_u16_le(&mut block, offset, 0xF800);
//! offset = write_u16_le(&mut block, offset, 0x001F);
//! offset = write_u32_le(&mut block, offset, 0x1234_5678);
//!
//! assert_eq!(offset, 8);
//! assert_eq!(block, [0x00, 0xF8, 0x1F, 0x00, 0x78, 0x56, 0x34, 0x12]);
//! ```
//!
//! All writers panic if `dest` is too short to hold the value at `offset`.

use dxt1_codec_common::color_8888::Color8888;

/// Writes a single byte.
#[inline(always)]
pub fn write_u8(dest: &mut [u8], offset: usize, value: u8) -> usize {
    dest[offset] = value;
    offset + 1
}

/// Writes a 16-bit value in little-endian order.
#[inline(always)]
pub fn write_u16_le(dest: &mut [u8], offset: usize, value: u16) -> usize {
    dest[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    offset + 2
}

/// Writes a 32-bit value in little-endian order.
#[inline(always)]
pub fn write_u32_le(dest: &mut [u8], offset: usize, value: u32) -> usize {
    dest[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    offset + 4
}

/// Writes a pixel as 4 bytes in RGBA order.
#[inline(always)]
pub fn write_rgba(dest: &mut [u8], offset: usize, pixel: Color8888) -> usize {
    let offset = write_u8(dest, offset, pixel.r);
    let offset = write_u8(dest, offset, pixel.g);
    let offset = write_u8(dest, offset, pixel.b);
    write_u8(dest, offset, pixel.a)
}
