//! Reduction of tick samples into summary statistics.
//!
//! All values are nanoseconds. The median is the sorted element at 1-based index
//! `⌈(N + 1) / 2⌉`, which is the upper of the two middle elements when `N` is even.
//! The mean is an integer sum divided by `N` (truncating) and the standard deviation
//! is the population deviation around that integer mean.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot compute statistics over zero samples")]
pub struct EmptySamples;

#[derive(Debug, Clone, PartialEq)]
pub struct TickStats {
    pub sample_count: usize,
    pub min: u64,
    pub max: u64,
    pub median: u64,
    pub mean: u64,
    pub std_dev: f64,
}

impl TickStats {
    /// Reduce `samples` (in recording order) into statistics.
    pub fn from_samples(samples: &[u64]) -> Result<Self, EmptySamples> {
        if samples.is_empty() {
            return Err(EmptySamples);
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let n = sorted.len();

        let sum: u128 = sorted.iter().map(|&ns| u128::from(ns)).sum();
        let mean = (sum / n as u128) as u64;

        let squared: u128 = sorted
            .iter()
            .map(|&ns| {
                let diff = i128::from(ns) - i128::from(mean);
                (diff * diff) as u128
            })
            .sum();
        let std_dev = (squared as f64 / n as f64).sqrt();

        Ok(Self {
            sample_count: n,
            min: sorted[0],
            max: sorted[n - 1],
            median: sorted[median_index(n)],
            mean,
            std_dev,
        })
    }
}

/// 0-based position of the median in a sorted sequence of `n` elements.
/// Equivalent to 1-based `⌈(n + 1) / 2⌉`.
pub fn median_index(n: usize) -> usize {
    n / 2
}

impl fmt::Display for TickStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lowest: {}ns", self.min)?;
        writeln!(f, "highest: {}ns", self.max)?;
        writeln!(f, "median: {}ns", self.median)?;
        writeln!(f, "mean: {}ns", self.mean)?;
        write!(f, "standard deviation: {:.3}ns", self.std_dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_samples() {
        let stats = TickStats::from_samples(&[5, 1, 3, 2, 4]).unwrap();
        assert_eq!(stats.sample_count, 5);
        assert_eq!(stats.min, 1);
        assert_eq!(stats.max, 5);
        assert_eq!(stats.median, 3);
        assert_eq!(stats.mean, 3);
        assert!((stats.std_dev - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn single_sample() {
        let stats = TickStats::from_samples(&[7]).unwrap();
        assert_eq!((stats.min, stats.max, stats.median, stats.mean), (7, 7, 7, 7));
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn even_count_takes_upper_middle() {
        let stats = TickStats::from_samples(&[40, 10, 30, 20]).unwrap();
        assert_eq!(stats.median, 30);

        assert_eq!(median_index(1), 0);
        assert_eq!(median_index(2), 1);
        assert_eq!(median_index(5), 2);
        assert_eq!(median_index(6), 3);
    }

    #[test]
    fn mean_truncates() {
        let stats = TickStats::from_samples(&[1, 2]).unwrap();
        assert_eq!(stats.mean, 1);
        // deviation is around the truncated mean: sqrt((0 + 1) / 2)
        assert!((stats.std_dev - 0.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn large_samples_do_not_overflow() {
        let stats = TickStats::from_samples(&[u64::MAX, u64::MAX, 0]).unwrap();
        assert_eq!(stats.max, u64::MAX);
        assert_eq!(stats.mean, u64::MAX / 3 * 2);
        assert!(stats.std_dev.is_finite());
    }

    #[test]
    fn input_order_is_irrelevant() {
        let a = TickStats::from_samples(&[900, 120, 450, 450, 77]).unwrap();
        let b = TickStats::from_samples(&[77, 450, 900, 450, 120]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_is_refused() {
        assert_eq!(TickStats::from_samples(&[]), Err(EmptySamples));
    }

    #[test]
    fn report_format() {
        let stats = TickStats::from_samples(&[5, 1, 3, 2, 4]).unwrap();
        assert_eq!(
            stats.to_string(),
            "lowest: 1ns\nhighest: 5ns\nmedian: 3ns\nmean: 3ns\nstandard deviation: 1.414ns"
        );
    }
}
