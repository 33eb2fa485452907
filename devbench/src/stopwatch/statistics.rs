//!
//! The step duration statistics.
//!

use super::error::Error;

///
/// The step duration statistics, in seconds.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// The shortest sample.
    pub min: f64,
    /// The longest sample.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The sample standard deviation.
    pub std_deviation: f64,
    /// The median.
    pub median: f64,
}

impl Statistics {
    /// The minimal number of samples the sample standard deviation is defined for.
    pub const MIN_SAMPLES: usize = 2;

    ///
    /// Computes the statistics of the `label` step samples.
    ///
    pub fn new(label: &str, samples: &[f64]) -> Result<Self, Error> {
        if samples.len() < Self::MIN_SAMPLES {
            return Err(Error::InsufficientSamples {
                label: label.to_owned(),
                count: samples.len(),
            });
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        let count = sorted.len() as f64;
        // Floating-point summation may drift a few ULPs past the bounds.
        let mean = (sorted.iter().sum::<f64>() / count).clamp(min, max);
        let variance = sorted
            .iter()
            .map(|sample| (sample - mean).powi(2))
            .sum::<f64>()
            / (count - 1.0);

        let middle = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[middle - 1] + sorted[middle]) / 2.0
        } else {
            sorted[middle]
        };

        Ok(Self {
            min,
            max,
            mean,
            std_deviation: variance.sqrt(),
            median,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use super::Statistics;

    #[test]
    fn odd() {
        let statistics =
            Statistics::new("unzip", &[3.0, 1.0, 2.0, 5.0, 4.0]).expect("Always valid");

        assert_eq!(statistics.min, 1.0);
        assert_eq!(statistics.max, 5.0);
        assert_eq!(statistics.mean, 3.0);
        assert_eq!(statistics.median, 3.0);
        assert!((statistics.std_deviation - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn even() {
        let statistics = Statistics::new("git add", &[4.0, 1.0, 3.0, 2.0]).expect("Always valid");

        assert_eq!(statistics.median, 2.5);
        assert_eq!(statistics.mean, 2.5);
    }

    #[test]
    fn identical_samples() {
        let statistics = Statistics::new("git status", &[0.1, 0.1, 0.1]).expect("Always valid");

        assert_eq!(statistics.std_deviation, 0.0);
        assert_eq!(statistics.min, statistics.max);
        assert_eq!(statistics.mean, 0.1);
    }

    #[test]
    fn bounds() {
        let samples = [0.013, 0.0021, 0.7, 0.1, 0.1, 0.29, 0.000_001];
        let statistics = Statistics::new("git stash", &samples).expect("Always valid");

        assert!(statistics.min <= statistics.median && statistics.median <= statistics.max);
        assert!(statistics.min <= statistics.mean && statistics.mean <= statistics.max);
    }

    #[test]
    fn error_single_sample() {
        let result = Statistics::new("recursive remove", &[0.5]);

        assert_eq!(
            result,
            Err(Error::InsufficientSamples {
                label: "recursive remove".to_owned(),
                count: 1,
            })
        );
    }

    #[test]
    fn error_no_samples() {
        assert!(Statistics::new("git init", &[]).is_err());
    }
}
