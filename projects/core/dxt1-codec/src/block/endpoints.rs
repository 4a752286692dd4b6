use dxt1_codec_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Inset the bounding box by `(max - min) >> INSET_SHIFT`, i.e. 1/16 of its size.
pub const INSET_SHIFT: u32 = 4;

/// The two representative colors picked for a block.
///
/// Alpha of both colors is always 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoints {
    /// Lower corner of the (inset) color bounding box.
    pub min: Color8888,
    /// Upper corner of the (inset) color bounding box.
    pub max: Color8888,
}

/// Finds the representative endpoint colors of a block.
///
/// Computes the per-channel bounding box of the 16 RGB values (alpha is ignored), then shrinks
/// it with [`inset_bounding_box`]. Channels are independent, so the corners need not be colors
/// that appear in the block.
///
/// # Example
///
/// ```
/// use dxt1_codec::{min_max_colors, Color8888, Decoded4x4Block};
///
/// let mut block = Decoded4x4Block::new(Color8888::new(10, 10, 10, 255));
/// block.pixels[5] = Color8888::new(250, 250, 250, 255);
///
/// let endpoints = min_max_colors(&block);
/// assert_eq!(endpoints.min, Color8888::new(25, 25, 25, 255));
/// assert_eq!(endpoints.max, Color8888::new(235, 235, 235, 255));
/// ```
#[inline]
pub fn min_max_colors(block: &Decoded4x4Block) -> Endpoints {
    let mut min = Color8888::new(255, 255, 255, 255);
    let mut max = Color8888::new(0, 0, 0, 255);

    for pixel in block.pixels.iter() {
        min.r = min.r.min(pixel.r);
        min.g = min.g.min(pixel.g);
        min.b = min.b.min(pixel.b);
        max.r = max.r.max(pixel.r);
        max.g = max.g.max(pixel.g);
        max.b = max.b.max(pixel.b);
    }

    inset_bounding_box(min, max)
}

/// Shrinks the box spanned by `min` and `max` by 1/16 of its size on every channel.
///
/// `min` moves up (saturating at 255) and `max` moves down (saturating at 0) by the same
/// per-channel inset. The inset is the arithmetic shift of the signed channel range truncated
/// to a byte, so a box with `min > max` on a channel produces a large wrapped inset and
/// saturates both sides.
#[inline]
pub fn inset_bounding_box(min: Color8888, max: Color8888) -> Endpoints {
    let inset_r = channel_inset(min.r, max.r);
    let inset_g = channel_inset(min.g, max.g);
    let inset_b = channel_inset(min.b, max.b);

    Endpoints {
        min: Color8888::new(
            min.r.checked_add(inset_r).unwrap_or(255),
            min.g.checked_add(inset_g).unwrap_or(255),
            min.b.checked_add(inset_b).unwrap_or(255),
            255,
        ),
        max: Color8888::new(
            max.r.checked_sub(inset_r).unwrap_or(0),
            max.g.checked_sub(inset_g).unwrap_or(0),
            max.b.checked_sub(inset_b).unwrap_or(0),
            255,
        ),
    }
}

#[inline(always)]
fn channel_inset(min: u8, max: u8) -> u8 {
    ((max as i32 - min as i32) >> INSET_SHIFT) as u8
}
