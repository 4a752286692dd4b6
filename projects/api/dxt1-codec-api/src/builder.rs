//! Builder for configuring DXT1 image compression and decompression.

use crate::rows::{compress_rows, decompress_rows};
use crate::{Dxt1Error, Execution};
use dxt1_codec::{Dxt1ValidationError, ImageLayout};
use log::{debug, warn};

/// DXT1 image codec configuration builder.
///
/// Holds the settings shared by [`compress`](Self::compress) and
/// [`decompress`](Self::decompress); the same builder can be reused for any number of images.
///
/// For the default settings, use [`crate::compress_image`] and [`crate::decompress_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dxt1ImageCodecBuilder {
    execution: Option<Execution>,
}

impl Dxt1ImageCodecBuilder {
    /// Create a new codec builder with the default settings.
    pub fn new() -> Self {
        Self { execution: None }
    }

    /// Set where rows of blocks are processed.
    ///
    /// Defaults to [`Execution::Parallel`]. The output does not depend on this setting.
    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = Some(execution);
        self
    }

    /// Decompress a DXT1 image into RGBA8888 pixels.
    ///
    /// # Parameters
    /// - `width`, `height`: Image dimensions in pixels. Both must be non-zero multiples of 4.
    /// - `input`: DXT1 blocks in row-major order, at least `(width / 4) * (height / 4) * 8` bytes.
    /// - `output`: Receives `width * height * 4` bytes of RGBA8888 pixels, alpha always 255.
    ///
    /// Bytes past the sizes above are neither read nor written.
    ///
    /// # Errors
    /// - [`Dxt1Error::InvalidDimensions`] if either dimension is not a non-zero multiple of 4.
    /// - [`Dxt1Error::BufferTooSmall`] if `input` or `output` is too short.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt1_codec_api::{Dxt1ImageCodecBuilder, Execution};
    ///
    /// // A single red block.
    /// let dxt1 = [0x00, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    /// let mut pixels = [0u8; 64];
    ///
    /// Dxt1ImageCodecBuilder::new()
    ///     .execution(Execution::Serial)
    ///     .decompress(4, 4, &dxt1, &mut pixels)?;
    ///
    /// assert!(pixels.chunks_exact(4).all(|p| p == [248, 0, 0, 255]));
    /// # Ok::<(), dxt1_codec_api::Dxt1Error>(())
    /// ```
    pub fn decompress(
        &self,
        width: usize,
        height: usize,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(), Dxt1Error> {
        let execution = self.resolved_execution();
        let reject = |error: Dxt1ValidationError| rejected("decompress", error);
        let layout = ImageLayout::new(width, height).map_err(reject)?;
        let input = layout.compressed(input).map_err(reject)?;
        let output = layout.pixels_mut(output).map_err(reject)?;

        debug!(
            "Decompressing {width}x{height} DXT1 image ({} blocks, {execution:?})",
            layout.num_blocks()
        );
        decompress_rows(&layout, input, output, execution);
        Ok(())
    }

    /// Compress an RGBA8888 image into DXT1 blocks.
    ///
    /// # Parameters
    /// - `width`, `height`: Image dimensions in pixels. Both must be non-zero multiples of 4.
    /// - `input`: RGBA8888 pixels in row-major order, at least `width * height * 4` bytes.
    ///   Alpha is ignored.
    /// - `output`: Receives `(width / 4) * (height / 4) * 8` bytes of DXT1 blocks.
    ///
    /// # Errors
    /// - [`Dxt1Error::InvalidDimensions`] if either dimension is not a non-zero multiple of 4.
    /// - [`Dxt1Error::BufferTooSmall`] if `input` or `output` is too short.
    pub fn compress(
        &self,
        width: usize,
        height: usize,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(), Dxt1Error> {
        let execution = self.resolved_execution();
        let reject = |error: Dxt1ValidationError| rejected("compress", error);
        let layout = ImageLayout::new(width, height).map_err(reject)?;
        let input = layout.pixels(input).map_err(reject)?;
        let output = layout.compressed_mut(output).map_err(reject)?;

        debug!(
            "Compressing {width}x{height} image to DXT1 ({} blocks, {execution:?})",
            layout.num_blocks()
        );
        compress_rows(&layout, input, output, execution);
        Ok(())
    }

    fn resolved_execution(&self) -> Execution {
        self.execution.unwrap_or_default().resolve()
    }
}

impl Default for Dxt1ImageCodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn rejected(operation: &str, error: Dxt1ValidationError) -> Dxt1Error {
    warn!("Rejected DXT1 {operation}: {error}");
    error.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case::serial(Execution::Serial)]
    #[case::parallel(Execution::Parallel)]
    fn decompress_two_blocks(#[case] execution: Execution) {
        init_logger();
        // Red block, then a 3-color block whose pixels all use index 3.
        let input = [
            0x00, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
            0x00, 0x00, 0x1F, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        let mut output = vec![0x11u8; 8 * 4 * 4];

        Dxt1ImageCodecBuilder::new()
            .execution(execution)
            .decompress(8, 4, &input, &mut output)
            .unwrap();

        for (i, pixel) in output.chunks_exact(4).enumerate() {
            let expected = if i % 8 < 4 {
                [248, 0, 0, 255]
            } else {
                [0, 0, 0, 255]
            };
            assert_eq!(pixel, expected, "pixel {i}");
        }
    }

    #[rstest]
    #[case::serial(Execution::Serial)]
    #[case::parallel(Execution::Parallel)]
    fn compress_then_decompress_solid_image(#[case] execution: Execution) {
        init_logger();
        let (width, height) = (16, 12);
        let pixels = solid_image(width, height, [0x84, 0x82, 0x84, 0x10]);
        let codec = Dxt1ImageCodecBuilder::new().execution(execution);

        let mut dxt1 = vec![0u8; 4 * 3 * 8];
        codec.compress(width, height, &pixels, &mut dxt1).unwrap();
        let mut restored = vec![0u8; pixels.len()];
        codec.decompress(width, height, &dxt1, &mut restored).unwrap();

        assert!(restored.chunks_exact(4).all(|p| p == [0x80, 0x80, 0x80, 255]));
    }

    #[rstest]
    #[case::zero(0, 4)]
    #[case::odd_height(8, 6)]
    fn rejects_invalid_dimensions(#[case] width: usize, #[case] height: usize) {
        init_logger();
        let codec = Dxt1ImageCodecBuilder::default();
        let expected = Err(Dxt1Error::InvalidDimensions { width, height });
        assert_eq!(codec.decompress(width, height, &[], &mut []), expected);
        assert_eq!(codec.compress(width, height, &[], &mut []), expected);
    }

    #[test]
    fn rejects_short_output() {
        init_logger();
        let mut output = [0u8; 63];
        assert_eq!(
            Dxt1ImageCodecBuilder::new().decompress(4, 4, &[0u8; 8], &mut output),
            Err(Dxt1Error::BufferTooSmall {
                buffer: dxt1_codec::BufferKind::Pixels,
                needed: 64,
                actual: 63,
            })
        );
    }

    #[test]
    fn defaults_to_parallel() {
        assert_eq!(
            Dxt1ImageCodecBuilder::new().resolved_execution(),
            Execution::Parallel.resolve()
        );
    }
}
