//!
//! The step stopwatch.
//!

pub mod error;
pub mod measurement;
pub mod statistics;

use std::fmt::Write;
use std::time::Duration;

use self::error::Error;
use self::measurement::Measurement;
use self::statistics::Statistics;

///
/// The step stopwatch.
///
/// Accumulates duration samples per step label, keeping the order in which the labels
/// have been seen for the first time.
///
#[derive(Debug, Default)]
pub struct Stopwatch {
    /// The step labels with their samples in seconds.
    steps: Vec<(String, Vec<f64>)>,
}

impl Stopwatch {
    /// The report header.
    pub const HEADER: &'static str =
        "label,min(seconds),max(seconds),mean(seconds),std deviation,median(seconds)";

    ///
    /// Runs `work`, attributing its wall-clock duration to the `label` step.
    ///
    /// The sample is recorded on every exit path, and the result of `work` is returned as is.
    ///
    pub fn measure<T, F>(&mut self, label: &str, work: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _measurement = Measurement::start(self, label);
        work()
    }

    ///
    /// Appends a sample to the `label` step.
    ///
    pub fn record(&mut self, label: &str, duration: Duration) {
        let seconds = duration.as_secs_f64();
        match self.steps.iter_mut().find(|(name, _)| name == label) {
            Some((_, samples)) => samples.push(seconds),
            None => self.steps.push((label.to_owned(), vec![seconds])),
        }
    }

    ///
    /// Returns the samples of the `label` step.
    ///
    pub fn samples(&self, label: &str) -> Option<&[f64]> {
        self.steps
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, samples)| samples.as_slice())
    }

    ///
    /// Returns the step labels in the order of their first appearance.
    ///
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|(label, _)| label.as_str())
    }

    ///
    /// Whether nothing has been recorded yet.
    ///
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    ///
    /// Renders the comma-separated report, one row per step.
    ///
    /// Values use the shortest round-trip `f64` formatting, so whole numbers have no
    /// fractional part, e.g. `0` rather than `0.0`.
    ///
    pub fn render(&self) -> Result<String, Error> {
        let mut content = String::with_capacity((self.steps.len() + 1) * 128);
        content.push_str(Self::HEADER);

        for (label, samples) in self.steps.iter() {
            let Statistics {
                min,
                max,
                mean,
                std_deviation,
                median,
            } = Statistics::new(label, samples)?;

            content.push('\n');
            write!(
                &mut content,
                "{label},{min},{max},{mean},{std_deviation},{median}"
            )
            .expect("Always valid");
        }

        Ok(content)
    }
}
