//! Whole-image DXT1 compression and decompression.
//!
//! Images are RGBA8888, row-major, `width * 4` bytes per row. DXT1 data is a row-major grid of
//! 8-byte blocks, `width / 4` blocks per row.
//!
//! The work is split into *block rows*: one row of blocks on the DXT1 side and the matching
//! 4 rows of pixels on the image side. Block rows never overlap, so they can be processed
//! in any order or in parallel. [`decompress_block_row`] and [`compress_block_row`] are the
//! units of work; [`decompress_image`] and [`compress_image`] validate the caller's buffers
//! and then run them serially.

use crate::block::{
    compress_block_into, decode_block_into, extract_block, CompressedBlock, DXT1_BLOCK_SIZE,
};
use crate::error::{BufferKind, Dxt1ValidationError};
use multiversion::multiversion;

/// Validated dimensions of an image, with the derived buffer sizes.
///
/// # Example
///
/// ```
/// use dxt1_codec::ImageLayout;
///
/// let layout = ImageLayout::new(8, 4).unwrap();
/// assert_eq!(layout.num_blocks(), 2);
/// assert_eq!(layout.compressed_size(), 16);
/// assert_eq!(layout.decompressed_size(), 128);
///
/// assert!(ImageLayout::new(6, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageLayout {
    width: usize,
    height: usize,
    decompressed_size: usize,
}

impl ImageLayout {
    /// Validates image dimensions.
    ///
    /// # Errors
    ///
    /// [`Dxt1ValidationError::InvalidDimensions`] if either dimension is zero or not a multiple
    /// of 4, or if the decompressed size of the image does not fit in a `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, Dxt1ValidationError> {
        let invalid = Dxt1ValidationError::InvalidDimensions { width, height };
        if width == 0 || height == 0 || width % 4 != 0 || height % 4 != 0 {
            return Err(invalid);
        }

        let decompressed_size = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(invalid)?;

        Ok(Self {
            width,
            height,
            decompressed_size,
        })
    }

    /// Width of the image in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the image in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of blocks in a row of blocks.
    #[inline]
    pub fn blocks_x(&self) -> usize {
        self.width / 4
    }

    /// Number of rows of blocks.
    #[inline]
    pub fn blocks_y(&self) -> usize {
        self.height / 4
    }

    /// Total number of blocks in the image.
    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.blocks_x() * self.blocks_y()
    }

    /// Size of one row of blocks in the DXT1 data, in bytes.
    #[inline]
    pub fn compressed_row_bytes(&self) -> usize {
        self.blocks_x() * DXT1_BLOCK_SIZE
    }

    /// Size of the 4 pixel rows covered by one row of blocks, in bytes.
    #[inline]
    pub fn pixel_row_bytes(&self) -> usize {
        self.width * 4 * 4
    }

    /// Size of the DXT1 data for the whole image, in bytes.
    #[inline]
    pub fn compressed_size(&self) -> usize {
        self.num_blocks() * DXT1_BLOCK_SIZE
    }

    /// Size of the RGBA8888 data for the whole image, in bytes.
    #[inline]
    pub fn decompressed_size(&self) -> usize {
        self.decompressed_size
    }

    /// Returns the part of `data` holding this image's DXT1 blocks.
    ///
    /// # Errors
    ///
    /// [`Dxt1ValidationError::BufferTooSmall`] if `data` is shorter than [`Self::compressed_size`].
    pub fn compressed<'a>(&self, data: &'a [u8]) -> Result<&'a [u8], Dxt1ValidationError> {
        let needed = self.compressed_size();
        data.get(..needed)
            .ok_or_else(|| too_small(BufferKind::Compressed, needed, data.len()))
    }

    /// Mutable version of [`Self::compressed`].
    pub fn compressed_mut<'a>(
        &self,
        data: &'a mut [u8],
    ) -> Result<&'a mut [u8], Dxt1ValidationError> {
        let needed = self.compressed_size();
        let actual = data.len();
        data.get_mut(..needed)
            .ok_or_else(|| too_small(BufferKind::Compressed, needed, actual))
    }

    /// Returns the part of `data` holding this image's pixels.
    ///
    /// # Errors
    ///
    /// [`Dxt1ValidationError::BufferTooSmall`] if `data` is shorter than
    /// [`Self::decompressed_size`].
    pub fn pixels<'a>(&self, data: &'a [u8]) -> Result<&'a [u8], Dxt1ValidationError> {
        let needed = self.decompressed_size();
        data.get(..needed)
            .ok_or_else(|| too_small(BufferKind::Pixels, needed, data.len()))
    }

    /// Mutable version of [`Self::pixels`].
    pub fn pixels_mut<'a>(&self, data: &'a mut [u8]) -> Result<&'a mut [u8], Dxt1ValidationError> {
        let needed = self.decompressed_size();
        let actual = data.len();
        data.get_mut(..needed)
            .ok_or_else(|| too_small(BufferKind::Pixels, needed, actual))
    }
}

/// Checks that `width` and `height` describe a whole grid of 4x4 blocks.
///
/// Shorthand for [`ImageLayout::new`].
#[inline]
pub fn validate_dimensions(
    width: usize,
    height: usize,
) -> Result<ImageLayout, Dxt1ValidationError> {
    ImageLayout::new(width, height)
}

/// Size in bytes of the DXT1 data for a `width` x `height` image.
///
/// ```
/// assert_eq!(dxt1_codec::compressed_size(64, 32), Ok(1024));
/// ```
#[inline]
pub fn compressed_size(width: usize, height: usize) -> Result<usize, Dxt1ValidationError> {
    Ok(ImageLayout::new(width, height)?.compressed_size())
}

/// Size in bytes of the RGBA8888 data for a `width` x `height` image.
#[inline]
pub fn decompressed_size(width: usize, height: usize) -> Result<usize, Dxt1ValidationError> {
    Ok(ImageLayout::new(width, height)?.decompressed_size())
}

#[inline]
fn too_small(buffer: BufferKind, needed: usize, actual: usize) -> Dxt1ValidationError {
    Dxt1ValidationError::BufferTooSmall {
        buffer,
        needed,
        actual,
    }
}

/// Decodes one row of blocks.
///
/// # Parameters
///
/// - `compressed_row`: The DXT1 blocks of the row. Every full 8-byte block is decoded; block
///   `n` covers pixel columns `4n..4n + 4`.
/// - `pixel_rows`: The 4 rows of pixels covered by the blocks (`width * 16` bytes).
/// - `width`: Width of the image in pixels. Columns at or past `width` are not written.
///
/// # Panics
///
/// If `pixel_rows` is too short for a block that has in-bounds columns.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub fn decompress_block_row(compressed_row: &[u8], pixel_rows: &mut [u8], width: usize) {
    for (block_x, bytes) in compressed_row.chunks_exact(DXT1_BLOCK_SIZE).enumerate() {
        let mut block = [0u8; DXT1_BLOCK_SIZE];
        block.copy_from_slice(bytes);
        decode_block_into(
            &CompressedBlock::from_bytes(&block),
            pixel_rows,
            block_x * 4,
            0,
            width,
        );
    }
}

/// Encodes one row of blocks.
///
/// # Parameters
///
/// - `pixel_rows`: The 4 rows of pixels to encode (`width * 16` bytes).
/// - `compressed_row`: Receives `width / 4` DXT1 blocks.
/// - `width`: Width of the image in pixels, a multiple of 4.
///
/// # Panics
///
/// If either buffer is shorter than the sizes above.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub fn compress_block_row(pixel_rows: &[u8], compressed_row: &mut [u8], width: usize) {
    let mut offset = 0;
    for block_x in 0..width / 4 {
        let block = extract_block(pixel_rows, width, block_x * 4, 0);
        offset = compress_block_into(&block, compressed_row, offset);
    }
}

/// Decompresses a DXT1 image into RGBA8888 pixels.
///
/// Blocks are read in row-major order, 8 bytes each. Only the first
/// [`ImageLayout::decompressed_size`] bytes of `output` are written; every one of them is
/// overwritten, and every pixel has alpha 255.
///
/// # Errors
///
/// - [`Dxt1ValidationError::InvalidDimensions`] if `width` or `height` is not a positive
///   multiple of 4.
/// - [`Dxt1ValidationError::BufferTooSmall`] if `input` or `output` is shorter than the image
///   requires.
///
/// # Example
///
/// ```
/// use dxt1_codec::decompress_image;
///
/// // 8x4 image: a red block and a blue block.
/// let input = [
///     0x00, 0xF8, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00,
///     0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
/// ];
/// let mut output = vec![0u8; 8 * 4 * 4];
///
/// decompress_image(8, 4, &input, &mut output)?;
/// assert_eq!(output[..4], [248, 0, 0, 255]);
/// assert_eq!(output[16..20], [0, 0, 248, 255]);
/// # Ok::<(), dxt1_codec::Dxt1ValidationError>(())
/// ```
pub fn decompress_image(
    width: usize,
    height: usize,
    input: &[u8],
    output: &mut [u8],
) -> Result<(), Dxt1ValidationError> {
    let layout = ImageLayout::new(width, height)?;
    let input = layout.compressed(input)?;
    let output = layout.pixels_mut(output)?;

    for (compressed_row, pixel_rows) in input
        .chunks_exact(layout.compressed_row_bytes())
        .zip(output.chunks_exact_mut(layout.pixel_row_bytes()))
    {
        decompress_block_row(compressed_row, pixel_rows, width);
    }

    Ok(())
}

/// Compresses an RGBA8888 image into DXT1 blocks.
///
/// Blocks are written in row-major order, 8 bytes each. Only the first
/// [`ImageLayout::compressed_size`] bytes of `output` are written. Alpha is ignored.
///
/// # Errors
///
/// - [`Dxt1ValidationError::InvalidDimensions`] if `width` or `height` is not a positive
///   multiple of 4.
/// - [`Dxt1ValidationError::BufferTooSmall`] if `input` or `output` is shorter than the image
///   requires.
pub fn compress_image(
    width: usize,
    height: usize,
    input: &[u8],
    output: &mut [u8],
) -> Result<(), Dxt1ValidationError> {
    let layout = ImageLayout::new(width, height)?;
    let input = layout.pixels(input)?;
    let output = layout.compressed_mut(output)?;

    for (pixel_rows, compressed_row) in input
        .chunks_exact(layout.pixel_row_bytes())
        .zip(output.chunks_exact_mut(layout.compressed_row_bytes()))
    {
        compress_block_row(pixel_rows, compressed_row, width);
    }

    Ok(())
}
