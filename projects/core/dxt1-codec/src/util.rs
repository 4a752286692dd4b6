//! Utility functions used by the block and image code.

mod writers;

pub use writers::*;
