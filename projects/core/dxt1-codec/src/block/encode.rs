use super::{color_indices, min_max_colors, CompressedBlock};
use dxt1_codec_common::{color_565::Color565, decoded_4x4_block::Decoded4x4Block};

/// Compresses a 4x4 block of pixels into a DXT1 block.
///
/// The upper endpoint is stored as `color0` and the lower one as `color1`. As the upper
/// endpoint is never below the lower one on any channel, `color0 >= color1` always holds,
/// so the block decodes in 4-color mode unless both endpoints are the same color. In that
/// case every pixel gets index 0 and the mode makes no difference.
///
/// Alpha is ignored.
///
/// # Example
///
/// ```
/// use dxt1_codec::{compress_block, decode_block, Color8888, Decoded4x4Block};
///
/// let block = Decoded4x4Block::new(Color8888::new(255, 0, 0, 255));
/// let compressed = compress_block(&block);
///
/// assert_eq!(compressed.color0.raw_value(), 0xF800);
/// assert_eq!(compressed.indices, 0);
/// assert!(decode_block(&compressed).pixels.iter().all(|&p| p == Color8888::new(248, 0, 0, 255)));
/// ```
#[inline]
pub fn compress_block(block: &Decoded4x4Block) -> CompressedBlock {
    let endpoints = min_max_colors(block);
    CompressedBlock {
        color0: Color565::from_color_8888(endpoints.max),
        color1: Color565::from_color_8888(endpoints.min),
        indices: color_indices(block, endpoints.min, endpoints.max),
    }
}

/// Compresses a block and writes its 8-byte wire form to `dest` at `offset`.
///
/// Returns the offset just past the written block.
///
/// # Panics
///
/// If `dest` has fewer than `offset + 8` bytes.
#[inline]
pub fn compress_block_into(block: &Decoded4x4Block, dest: &mut [u8], offset: usize) -> usize {
    compress_block(block).write_to(dest, offset)
}
