//! A single RGBA8888 pixel, as read from an uncompressed image or written by the decoder.

use crate::color_565::{quantize_5, quantize_6, Color565};

/// Represents a single RGBA8888 pixel color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Opaque black. Index 3 of a 3-color block decodes to this.
    pub const OPAQUE_BLACK: Self = Self::new(0, 0, 0, 255);

    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt1_codec_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Reads a pixel from 4 bytes in RGBA order.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Returns the pixel as 4 bytes in RGBA order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Packs the RGB components into a [`Color565`]. Alpha is ignored.
    #[inline]
    pub const fn to_color_565(self) -> Color565 {
        Color565::from_color_8888(self)
    }

    /// Reduces each channel to 565 precision, staying in 8-bit range.
    ///
    /// See [`quantize_5`] and [`quantize_6`]. Alpha is kept as is.
    #[inline]
    pub const fn quantize_565(self) -> Self {
        Self::new(
            quantize_5(self.r),
            quantize_6(self.g),
            quantize_5(self.b),
            self.a,
        )
    }

    /// Sum of absolute per-channel differences over RGB. Alpha is ignored.
    #[inline(always)]
    pub const fn manhattan_distance_rgb(self, other: Self) -> u32 {
        (self.r.abs_diff(other.r) as u32)
            + (self.g.abs_diff(other.g) as u32)
            + (self.b.abs_diff(other.b) as u32)
    }
}
