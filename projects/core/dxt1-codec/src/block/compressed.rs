use crate::util::{write_u16_le, write_u32_le};
use dxt1_codec_common::color_565::Color565;

/// Size of a single DXT1 block, in bytes.
pub const DXT1_BLOCK_SIZE: usize = 8;

/// A single DXT1 block in unpacked form.
///
/// On the wire this is `color0: u16`, `color1: u16`, `indices: u32`, all little-endian.
/// The index of the pixel at (`row`, `col`) lives at bit offset `2 * (4 * row + col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompressedBlock {
    /// First endpoint.
    pub color0: Color565,
    /// Second endpoint.
    pub color1: Color565,
    /// 16 packed 2-bit palette indices.
    pub indices: u32,
}

impl CompressedBlock {
    /// Creates a block from its fields.
    #[inline]
    pub const fn new(color0: Color565, color1: Color565, indices: u32) -> Self {
        Self {
            color0,
            color1,
            indices,
        }
    }

    /// Reads a block from its 8-byte wire form.
    #[inline]
    pub const fn from_bytes(bytes: &[u8; DXT1_BLOCK_SIZE]) -> Self {
        Self {
            color0: Color565::from_le_bytes([bytes[0], bytes[1]]),
            color1: Color565::from_le_bytes([bytes[2], bytes[3]]),
            indices: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    /// Reads a block from the start of a slice.
    ///
    /// Returns [`None`] if the slice is shorter than [`DXT1_BLOCK_SIZE`].
    #[inline]
    pub fn from_slice(src: &[u8]) -> Option<Self> {
        let bytes: &[u8; DXT1_BLOCK_SIZE] = src.get(..DXT1_BLOCK_SIZE)?.try_into().ok()?;
        Some(Self::from_bytes(bytes))
    }

    /// Returns the 8-byte wire form of this block.
    #[inline]
    pub fn to_bytes(&self) -> [u8; DXT1_BLOCK_SIZE] {
        let mut bytes = [0u8; DXT1_BLOCK_SIZE];
        self.write_to(&mut bytes, 0);
        bytes
    }

    /// Writes the wire form of this block at `offset`, returning the offset past it.
    ///
    /// # Panics
    ///
    /// If `dest` has fewer than `offset + 8` bytes.
    #[inline]
    pub fn write_to(&self, dest: &mut [u8], offset: usize) -> usize {
        let offset = write_u16_le(dest, offset, self.color0.raw_value());
        let offset = write_u16_le(dest, offset, self.color1.raw_value());
        write_u32_le(dest, offset, self.indices)
    }

    /// Returns `true` if this block decodes in 4-color mode (`color0 > color1`).
    #[inline]
    pub const fn is_four_color(&self) -> bool {
        self.color0.greater_than(&self.color1)
    }

    /// Returns the 2-bit palette index of the pixel at column `x`, row `y`.
    #[inline(always)]
    pub const fn index_at(&self, x: usize, y: usize) -> usize {
        ((self.indices >> (2 * (4 * y + x))) & 0x3) as usize
    }
}
