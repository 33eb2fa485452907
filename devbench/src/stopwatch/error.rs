//!
//! The stopwatch error.
//!

///
/// The stopwatch error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The standard deviation of a step is requested with too few samples.
    #[error("Step `{label}` has {count} sample(s), but at least 2 are required for the standard deviation")]
    InsufficientSamples {
        /// The step label.
        label: String,
        /// The number of recorded samples.
        count: usize,
    },
}
