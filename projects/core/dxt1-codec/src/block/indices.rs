use dxt1_codec_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Builds the 4 candidate colors the encoder measures pixels against.
///
/// `candidates[0]` and `candidates[1]` are `max` and `min` reduced to 565 precision
/// (see [`Color8888::quantize_565`]); `candidates[2]` and `candidates[3]` are the 2:1 and 1:2
/// blends of those, with integer division per channel. Alpha of every candidate is 255.
#[inline]
pub fn candidate_colors(min: Color8888, max: Color8888) -> [Color8888; 4] {
    let c0 = max.quantize_565();
    let c1 = min.quantize_565();

    [
        Color8888::new(c0.r, c0.g, c0.b, 255),
        Color8888::new(c1.r, c1.g, c1.b, 255),
        Color8888::new(
            ((2 * c0.r as u16 + c1.r as u16) / 3) as u8,
            ((2 * c0.g as u16 + c1.g as u16) / 3) as u8,
            ((2 * c0.b as u16 + c1.b as u16) / 3) as u8,
            255,
        ),
        Color8888::new(
            ((c0.r as u16 + 2 * c1.r as u16) / 3) as u8,
            ((c0.g as u16 + 2 * c1.g as u16) / 3) as u8,
            ((c0.b as u16 + 2 * c1.b as u16) / 3) as u8,
            255,
        ),
    ]
}

/// Picks the 2-bit index of a pixel from its distances to the 4 candidate colors.
///
/// This is a fixed comparison network rather than a minimum search; distance ties resolve
/// the way other DXT1 encoders built on the same network resolve them.
#[inline(always)]
pub const fn select_index(d0: u32, d1: u32, d2: u32, d3: u32) -> u32 {
    let b0 = (d0 > d3) as u32;
    let b1 = (d1 > d2) as u32;
    let b2 = (d0 > d2) as u32;
    let b3 = (d1 > d3) as u32;
    let b4 = (d2 > d3) as u32;

    let x0 = b1 & b2;
    let x1 = b0 & b3;
    let x2 = b0 & b4;

    x2 | ((x0 | x1) << 1)
}

/// Assigns every pixel of a block the index of its closest candidate color.
///
/// # Parameters
///
/// - `block`: The pixels to classify. Alpha is ignored.
/// - `min`, `max`: The block endpoints, as returned by [`crate::min_max_colors`].
///
/// # Returns
///
/// The packed index field; pixel `i` (row-major) occupies bits `2 * i` and `2 * i + 1`.
///
/// # Example
///
/// ```
/// use dxt1_codec::{color_indices, Color8888, Decoded4x4Block};
///
/// let white = Color8888::new(255, 255, 255, 255);
/// let black = Color8888::new(0, 0, 0, 255);
///
/// let mut block = Decoded4x4Block::new(white);
/// block.pixels[1] = black;
///
/// let indices = color_indices(&block, black, white);
/// assert_eq!(indices, 0b01 << 2);
/// ```
#[inline]
pub fn color_indices(block: &Decoded4x4Block, min: Color8888, max: Color8888) -> u32 {
    let candidates = candidate_colors(min, max);
    let mut indices = 0u32;

    for (i, pixel) in block.pixels.iter().enumerate().rev() {
        let d0 = candidates[0].manhattan_distance_rgb(*pixel);
        let d1 = candidates[1].manhattan_distance_rgb(*pixel);
        let d2 = candidates[2].manhattan_distance_rgb(*pixel);
        let d3 = candidates[3].manhattan_distance_rgb(*pixel);

        indices |= select_index(d0, d1, d2, d3) << (i << 1);
    }

    indices
}
