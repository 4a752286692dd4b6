//! # RGB565 Color Format Support
//!
//! This module provides support for the 16-bit RGB565 colors stored as the two endpoints
//! of every DXT1 (BC1) block.
//!
//! ## Overview
//!
//! RGB565 packs red, green, and blue color components into a single 16-bit value:
//!
//! - **Red**: 5 bits (bits 15-11)
//! - **Green**: 6 bits (bits 10-5)
//! - **Blue**: 5 bits (bits 4-0)
//!
//! ## Precision Helpers
//!
//! Two different 8-bit views of 565 precision are used by the codec:
//!
//! - [`Color565::red`], [`Color565::green`], [`Color565::blue`] move each field back to the top
//!   of its byte, leaving the vacated low bits clear. This is what the decoder outputs.
//! - [`quantize_5`] and [`quantize_6`] drop the low bits of an 8-bit channel and refill them from
//!   its top bits. The encoder builds its candidate colors from these values before measuring
//!   distances.
//!
//! ## Examples
//!
//! ```rust
//! use dxt1_codec_common::color_565::Color565;
//!
//! // Pure red, as stored on the wire.
//! let color = Color565::from_raw(0xF800);
//! assert_eq!(color.red(), 248);
//! assert_eq!(color.green(), 0);
//! assert_eq!(color.blue(), 0);
//!
//! // Packing from 8-bit components drops the low bits of each channel.
//! assert_eq!(Color565::from_rgb(255, 0, 0).raw_value(), 0xF800);
//! ```

use crate::color_8888::Color8888;

/// Mask keeping the top 5 bits of an 8-bit channel.
pub const MASK_5: u8 = 0xF8;

/// Mask keeping the top 6 bits of an 8-bit channel.
pub const MASK_6: u8 = 0xFC;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// as stored in the endpoints of a DXT1 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from separate 8-bit RGB components.
    ///
    /// The low 3 (red, blue) or 2 (green) bits of each channel are discarded.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 & MASK_5 as u16) << 8)
                | ((g as u16 & MASK_6 as u16) << 3)
                | (b as u16 >> 3),
        }
    }

    /// Creates a new [`Color565`] from the RGB components of a [`Color8888`].
    /// Alpha is ignored.
    #[inline]
    pub const fn from_color_8888(color: Color8888) -> Self {
        Self::from_rgb(color.r, color.g, color.b)
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// Extracts the 8-bit red component.
    ///
    /// The 5-bit field is placed in bits 7-3, so the result is always a multiple of 8
    /// (`0x1F` expands to `248`).
    #[inline]
    pub const fn red(&self) -> u8 {
        ((self.value >> 8) as u8) & MASK_5
    }

    /// Extracts the 8-bit green component.
    ///
    /// The 6-bit field is placed in bits 7-2, so the result is always a multiple of 4
    /// (`0x3F` expands to `252`).
    #[inline]
    pub const fn green(&self) -> u8 {
        ((self.value >> 3) as u8) & MASK_6
    }

    /// Extracts the 8-bit blue component.
    ///
    /// The 5-bit field is placed in bits 7-3, so the result is always a multiple of 8.
    #[inline]
    pub const fn blue(&self) -> u8 {
        ((self.value << 3) as u8) & MASK_5
    }

    /// Compares two [`Color565`] values as raw 16-bit integers.
    ///
    /// Returns if this value is greater than the other.
    /// This comparison selects between the 4-color and 3-color block modes when decoding.
    #[inline]
    pub const fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a fully opaque [`Color8888`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt1_codec_common::color_565::Color565;
    ///
    /// let rgba = Color565::from_raw(0x001F).to_color_8888();
    /// assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0, 0, 248, 255));
    /// ```
    #[inline]
    pub const fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 255)
    }

    /// Returns the value as it is stored on the wire (little-endian).
    #[inline]
    pub const fn to_le_bytes(&self) -> [u8; 2] {
        self.value.to_le_bytes()
    }

    /// Reads a value stored on the wire (little-endian).
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_le_bytes(bytes))
    }
}

/// Reduces an 8-bit channel to 5-bit precision while keeping it in 8-bit range.
///
/// The top 5 bits are kept and the top 3 bits are replicated into the low 3 bits.
///
/// ```
/// use dxt1_codec_common::color_565::quantize_5;
///
/// assert_eq!(quantize_5(255), 255);
/// assert_eq!(quantize_5(0b1010_1111), 0b1010_1101);
/// ```
#[inline(always)]
pub const fn quantize_5(value: u8) -> u8 {
    (value & MASK_5) | (value >> 5)
}

/// Reduces an 8-bit channel to 6-bit precision while keeping it in 8-bit range.
///
/// The top 6 bits are kept and the top 2 bits are replicated into the low 2 bits.
///
/// ```
/// use dxt1_codec_common::color_565::quantize_6;
///
/// assert_eq!(quantize_6(255), 255);
/// assert_eq!(quantize_6(0b1000_0011), 0b1000_0010);
/// ```
#[inline(always)]
pub const fn quantize_6(value: u8) -> u8 {
    (value & MASK_6) | (value >> 6)
}
