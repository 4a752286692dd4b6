use dxt1_codec_common::decoded_4x4_block::{Decoded4x4Block, BLOCK_RGBA_BYTES};

/// Copies the 4x4 block with top-left corner (`x`, `y`) out of a row-major RGBA8888 image.
///
/// The block is read as 4 rows of 16 bytes, each `width * 4` bytes apart in `image`.
///
/// # Parameters
///
/// - `image`: The source image, RGBA8888, row-major.
/// - `width`: Width of the source image in pixels.
/// - `x`, `y`: Top-left corner of the block, in pixels.
///
/// # Panics
///
/// If the 4x4 footprint does not lie within `image`.
///
/// # Example
///
/// ```
/// use dxt1_codec::{extract_block, Color8888};
///
/// // 8x4 image: left half black, right half white.
/// let mut image = vec![0u8; 8 * 4 * 4];
/// for row in image.chunks_exact_mut(8 * 4) {
///     row[16..].fill(255);
/// }
///
/// let block = extract_block(&image, 8, 4, 0);
/// assert!(block.pixels.iter().all(|&p| p == Color8888::new(255, 255, 255, 255)));
/// ```
#[inline]
pub fn extract_block(image: &[u8], width: usize, x: usize, y: usize) -> Decoded4x4Block {
    let stride = width * 4;
    let mut bytes = [0u8; BLOCK_RGBA_BYTES];
    let mut src_offset = y * stride + x * 4;
    for row in bytes.chunks_exact_mut(16) {
        row.copy_from_slice(&image[src_offset..src_offset + 16]);
        src_offset += stride;
    }

    Decoded4x4Block::from_rgba_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case::top_left(0, 0)]
    #[case::top_right(8, 0)]
    #[case::bottom_left(0, 4)]
    #[case::bottom_right(8, 4)]
    fn extracts_each_block_of_image(#[case] x: usize, #[case] y: usize) {
        let width = 12;
        let image = generate_gradient_image(width, 8);

        let block = extract_block(&image, width, x, y);
        for row in 0..4 {
            for col in 0..4 {
                let ofs = ((y + row) * width + (x + col)) * 4;
                let expected =
                    Color8888::new(image[ofs], image[ofs + 1], image[ofs + 2], image[ofs + 3]);
                assert_eq!(block.get_pixel(col, row), expected, "pixel ({col}, {row})");
            }
        }
    }

    #[test]
    #[should_panic]
    fn footprint_outside_image_panics() {
        let image = generate_gradient_image(4, 4);
        extract_block(&image, 4, 0, 4);
    }
}
