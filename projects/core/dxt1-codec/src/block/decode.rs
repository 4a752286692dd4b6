//! DXT1 block decoding.
//!
//! Endpoint expansion and blending use exact integer arithmetic, so the output is
//! bit-identical on every platform.

use super::CompressedBlock;
use crate::util::write_rgba;
use dxt1_codec_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};
use likely_stable::likely;

/// Builds the 4-entry palette a block's indices select from.
///
/// - `color0 > color1` (raw 16-bit compare): `[c0, c1, (2*c0 + c1) / 3, (c0 + 2*c1) / 3]`
/// - otherwise: `[c0, c1, (c0 + c1) / 2, black]`
///
/// Division is integer division per channel. Every entry is fully opaque; DXT1 as implemented
/// here does not produce transparency.
#[inline]
pub fn block_palette(block: &CompressedBlock) -> [Color8888; 4] {
    let c0 = block.color0.to_color_8888();
    let c1 = block.color1.to_color_8888();

    let (r0, g0, b0) = (c0.r as u32, c0.g as u32, c0.b as u32);
    let (r1, g1, b1) = (c1.r as u32, c1.g as u32, c1.b as u32);

    if block.is_four_color() {
        [
            c0,
            c1,
            Color8888::new(
                ((2 * r0 + r1) / 3) as u8,
                ((2 * g0 + g1) / 3) as u8,
                ((2 * b0 + b1) / 3) as u8,
                255,
            ),
            Color8888::new(
                ((r0 + 2 * r1) / 3) as u8,
                ((g0 + 2 * g1) / 3) as u8,
                ((b0 + 2 * b1) / 3) as u8,
                255,
            ),
        ]
    } else {
        [
            c0,
            c1,
            Color8888::new(
                ((r0 + r1) / 2) as u8,
                ((g0 + g1) / 2) as u8,
                ((b0 + b1) / 2) as u8,
                255,
            ),
            Color8888::OPAQUE_BLACK,
        ]
    }
}

/// Decodes a DXT1 block into a structured representation of pixels.
///
/// # Example
///
/// ```
/// use dxt1_codec::{decode_block, CompressedBlock, Color8888};
///
/// let block = CompressedBlock::from_bytes(&[
///     0x00, 0xF8, // c0 = red
///     0x1F, 0x00, // c1 = blue
///     0x00, 0x00, 0x00, 0x00, // All pixels use index 0
/// ]);
///
/// let decoded = decode_block(&block);
/// assert!(decoded.pixels.iter().all(|&p| p == Color8888::new(248, 0, 0, 255)));
/// ```
#[inline]
pub fn decode_block(block: &CompressedBlock) -> Decoded4x4Block {
    let palette = block_palette(block);
    let mut result = Decoded4x4Block::default();
    for (i, pixel) in result.pixels.iter_mut().enumerate() {
        *pixel = palette[((block.indices >> (i * 2)) & 0x3) as usize];
    }

    result
}

/// Decodes a DXT1 block from the start of a slice.
///
/// Returns [`None`] if the slice is shorter than 8 bytes.
#[inline]
pub fn decode_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    CompressedBlock::from_slice(src).map(|block| decode_block(&block))
}

/// Decodes a DXT1 block straight into a row-major RGBA8888 image.
///
/// The pixel at column `i`, row `j` of the block is written to byte offset
/// `((y + j) * width + (x + i)) * 4`. Columns with `x + i >= width` are skipped, which lets
/// a block hang over the right edge of an image. There is no such check for rows.
///
/// # Parameters
///
/// - `block`: The block to decode.
/// - `dest`: The destination image, RGBA8888, row-major, `width * 4` bytes per row.
/// - `x`, `y`: Top-left corner of the block, in pixels.
/// - `width`: Width of the destination image in pixels.
///
/// # Panics
///
/// If a row of the block that has at least one in-bounds column lies outside `dest`.
/// The image level functions validate their buffers up front so this cannot happen there.
#[inline]
pub fn decode_block_into(
    block: &CompressedBlock,
    dest: &mut [u8],
    x: usize,
    y: usize,
    width: usize,
) {
    let palette = block_palette(block);

    for j in 0..4 {
        for i in 0..4 {
            if likely(x + i < width) {
                let offset = ((y + j) * width + (x + i)) * 4;
                write_rgba(dest, offset, palette[block.index_at(i, j)]);
            }
        }
    }
}
