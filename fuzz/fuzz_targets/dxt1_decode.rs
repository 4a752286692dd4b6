#![no_main]

// Checks that every decoded pixel is opaque and comes from the block's palette.

use dxt1_codec::{block_palette, decode_block, CompressedBlock};
use dxt1_codec_common::color_8888::Color8888;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Dxt1Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|input: Dxt1Block| {
    let block = CompressedBlock::from_bytes(&input.bytes);
    let palette = block_palette(&block);
    let decoded = decode_block(&block);

    for (i, pixel) in decoded.pixels.iter().enumerate() {
        assert_eq!(pixel.a, 255, "pixel {i} is not opaque");
        assert!(palette.contains(pixel), "pixel {i} is outside the palette");

        let index = block.index_at(i % 4, i / 4);
        assert_eq!(*pixel, palette[index]);
        if !block.is_four_color() && index == 3 {
            assert_eq!(*pixel, Color8888::OPAQUE_BLACK);
        }
    }

    assert_eq!(block.to_bytes(), input.bytes);
});
