//! Per-block DXT1 primitives.
//!
//! Every function here operates on a single 4x4 block, holds no state, and cannot fail.
//! Blocks are independent of each other, so callers are free to process them in any order
//! or in parallel.

mod compressed;
mod decode;
mod encode;
mod endpoints;
mod extract;
mod indices;

pub use compressed::*;
pub use decode::*;
pub use encode::*;
pub use endpoints::*;
pub use extract::*;
pub use indices::*;
