//! How an image is scheduled across threads.

use derive_enum_all_values::AllValues;

/// Where the rows of blocks of an image are processed.
///
/// Both modes produce identical output.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum Execution {
    /// Process every row of blocks on the calling thread.
    Serial,

    /// Split the rows of blocks across the global rayon thread pool.
    ///
    /// Runs serially when the `parallel` feature is disabled.
    #[default]
    Parallel,
}

impl Execution {
    /// Returns the mode that will actually run with the enabled crate features.
    #[inline]
    pub fn resolve(self) -> Self {
        if cfg!(feature = "parallel") {
            self
        } else {
            Execution::Serial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_always_resolves_to_serial() {
        assert_eq!(Execution::Serial.resolve(), Execution::Serial);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_is_kept_with_feature() {
        assert_eq!(Execution::Parallel.resolve(), Execution::Parallel);
    }

    #[test]
    fn lists_every_mode() {
        assert_eq!(Execution::all_values().len(), 2);
    }
}
