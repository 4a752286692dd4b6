#![no_main]

// Encodes arbitrary 4x4 blocks and checks the result is well formed.

use dxt1_codec::{compress_block, decode_block, min_max_colors};
use dxt1_codec_common::decoded_4x4_block::{Decoded4x4Block, BLOCK_RGBA_BYTES};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct RgbaBlock {
    pub bytes: [u8; BLOCK_RGBA_BYTES],
}

fuzz_target!(|input: RgbaBlock| {
    let block = Decoded4x4Block::from_rgba_bytes(&input.bytes);
    let compressed = compress_block(&block);

    // color0 comes from the max corner, so 4-color mode is used unless the endpoints collapse.
    assert!(compressed.color0 >= compressed.color1);
    if compressed.color0 == compressed.color1 {
        assert_eq!(compressed.indices, 0);
    }

    let decoded = decode_block(&compressed);
    assert!(decoded.pixels.iter().all(|pixel| pixel.a == 255));

    // A solid block stays within 565 precision of its color.
    if block.has_identical_pixels() {
        let original = min_max_colors(&block).min;
        for pixel in decoded.pixels {
            assert_eq!(pixel.to_color_565(), original.to_color_565());
        }
    }
});
