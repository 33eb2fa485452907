//!
//! The scoped stopwatch measurement.
//!

use std::time::Instant;

use super::Stopwatch;

///
/// The scoped stopwatch measurement.
///
/// Records the elapsed time into the stopwatch when dropped, including during unwinding.
///
pub struct Measurement<'a> {
    /// The stopwatch receiving the sample.
    stopwatch: &'a mut Stopwatch,
    /// The step label.
    label: &'a str,
    /// The moment the measurement has started.
    start: Instant,
}

impl<'a> Measurement<'a> {
    ///
    /// Starts the clock.
    ///
    pub fn start(stopwatch: &'a mut Stopwatch, label: &'a str) -> Self {
        Self {
            stopwatch,
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for Measurement<'_> {
    fn drop(&mut self) {
        self.stopwatch.record(self.label, self.start.elapsed());
    }
}
