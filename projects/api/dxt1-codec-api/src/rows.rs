//! Dispatches rows of blocks to the per-row codec functions.
//!
//! Callers pass buffers already trimmed to the exact sizes from [`ImageLayout`], so the row
//! chunks on both sides line up one to one.

use crate::Execution;
use dxt1_codec::{compress_block_row, decompress_block_row, ImageLayout};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub(crate) fn decompress_rows(
    layout: &ImageLayout,
    input: &[u8],
    output: &mut [u8],
    execution: Execution,
) {
    let width = layout.width();
    match execution.resolve() {
        #[cfg(feature = "parallel")]
        Execution::Parallel => output
            .par_chunks_mut(layout.pixel_row_bytes())
            .zip(input.par_chunks(layout.compressed_row_bytes()))
            .for_each(|(pixel_rows, compressed_row)| {
                decompress_block_row(compressed_row, pixel_rows, width)
            }),
        _ => {
            for (pixel_rows, compressed_row) in output
                .chunks_exact_mut(layout.pixel_row_bytes())
                .zip(input.chunks_exact(layout.compressed_row_bytes()))
            {
                decompress_block_row(compressed_row, pixel_rows, width);
            }
        }
    }
}

pub(crate) fn compress_rows(
    layout: &ImageLayout,
    input: &[u8],
    output: &mut [u8],
    execution: Execution,
) {
    let width = layout.width();
    match execution.resolve() {
        #[cfg(feature = "parallel")]
        Execution::Parallel => output
            .par_chunks_mut(layout.compressed_row_bytes())
            .zip(input.par_chunks(layout.pixel_row_bytes()))
            .for_each(|(compressed_row, pixel_rows)| {
                compress_block_row(pixel_rows, compressed_row, width)
            }),
        _ => {
            for (compressed_row, pixel_rows) in output
                .chunks_exact_mut(layout.compressed_row_bytes())
                .zip(input.chunks_exact(layout.pixel_row_bytes()))
            {
                compress_block_row(pixel_rows, compressed_row, width);
            }
        }
    }
}
