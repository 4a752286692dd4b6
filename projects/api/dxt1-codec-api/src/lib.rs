#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod execution;
mod rows;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use builder::Dxt1ImageCodecBuilder;
pub use dxt1_codec::BufferKind;
pub use error::Dxt1Error;
pub use execution::Execution;

/// Size in bytes of the DXT1 data for a `width` x `height` image.
///
/// # Errors
///
/// [`Dxt1Error::InvalidDimensions`] if either dimension is not a non-zero multiple of 4.
///
/// ```
/// assert_eq!(dxt1_codec_api::compressed_size(64, 32), Ok(1024));
/// ```
pub fn compressed_size(width: usize, height: usize) -> Result<usize, Dxt1Error> {
    dxt1_codec::compressed_size(width, height).map_err(Into::into)
}

/// Size in bytes of the RGBA8888 data for a `width` x `height` image.
///
/// # Errors
///
/// [`Dxt1Error::InvalidDimensions`] if either dimension is not a non-zero multiple of 4.
pub fn decompressed_size(width: usize, height: usize) -> Result<usize, Dxt1Error> {
    dxt1_codec::decompressed_size(width, height).map_err(Into::into)
}

/// Decompresses a DXT1 image into RGBA8888 pixels with the default settings.
///
/// See [`Dxt1ImageCodecBuilder::decompress`].
///
/// # Errors
///
/// Returns [`Dxt1Error`] if the dimensions are invalid or a buffer is too small.
pub fn decompress_image(
    width: usize,
    height: usize,
    input: &[u8],
    output: &mut [u8],
) -> Result<(), Dxt1Error> {
    Dxt1ImageCodecBuilder::new().decompress(width, height, input, output)
}

/// Compresses an RGBA8888 image into DXT1 blocks with the default settings.
///
/// See [`Dxt1ImageCodecBuilder::compress`].
///
/// # Errors
///
/// Returns [`Dxt1Error`] if the dimensions are invalid or a buffer is too small.
pub fn compress_image(
    width: usize,
    height: usize,
    input: &[u8],
    output: &mut [u8],
) -> Result<(), Dxt1Error> {
    Dxt1ImageCodecBuilder::new().compress(width, height, input, output)
}
