//! Outlier-trimmed statistics over measurement samples
//!
//! Throughput phases collect dozens of instantaneous speed samples that are
//! noisy at both tails (TCP ramp-up at the low end, buffer bursts at the
//! high end). Latency phases collect a handful of round-trip times where a
//! single congested probe can dominate the mean. Both are reduced here with
//! a trim-then-average strategy; the maximum is always taken untrimmed so
//! the best observed burst is still reported.

use serde::{Deserialize, Serialize};

/// How many samples to discard from each sorted tail before averaging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrimPolicy {
    /// Drop `max(1, floor(n * fraction))` samples from each end.
    /// Used for throughput samples (fraction 0.1 by default).
    Fraction(f64),
    /// Drop a fixed number of samples from each end.
    /// Used for small-N latency sets (count 1 by default).
    Count(usize),
}

impl TrimPolicy {
    /// Default policy for throughput samples: 10% from each tail
    pub fn throughput() -> Self {
        TrimPolicy::Fraction(0.1)
    }

    /// Default policy for latency samples: single sample from each tail
    pub fn latency() -> Self {
        TrimPolicy::Count(1)
    }

    /// Number of samples this policy removes from each tail of an
    /// n-element set. Zero when n < 3; trimming never applies below that.
    pub fn tail_count(&self, n: usize) -> usize {
        if n < 3 {
            return 0;
        }
        match *self {
            TrimPolicy::Fraction(fraction) => ((n as f64 * fraction) as usize).max(1),
            TrimPolicy::Count(count) => count,
        }
    }
}

/// Trimmed-mean / max aggregation over a sample sequence
pub struct SampleStatistics;

impl SampleStatistics {
    /// Average after discarding outliers from both sorted tails.
    ///
    /// Sorts ascending, drops `policy.tail_count(n)` from each end, then
    /// averages the remainder. Falls back to the plain mean whenever
    /// trimming would leave nothing (including n < 3). Returns 0.0 for an
    /// empty input; callers treat an empty sample set as "no usable data"
    /// before ever asking for statistics.
    pub fn trimmed_mean(samples: &[f64], policy: TrimPolicy) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }

        let trim = policy.tail_count(samples.len());
        if trim == 0 || samples.len() <= 2 * trim {
            return Self::mean(samples);
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let surviving = &sorted[trim..sorted.len() - trim];
        Self::mean(surviving)
    }

    /// Untrimmed maximum of the full sample set
    pub fn max(samples: &[f64]) -> f64 {
        samples.iter().copied().fold(0.0, f64::max)
    }

    /// Plain arithmetic mean (0.0 for empty input)
    pub fn mean(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// Mean of the most recent `window` samples, used for live progress.
    /// Returns 0.0 until the first sample arrives.
    pub fn recent_mean(samples: &[f64], window: usize) -> f64 {
        if samples.is_empty() || window == 0 {
            return 0.0;
        }
        let start = samples.len().saturating_sub(window);
        Self::mean(&samples[start..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tail_count_thresholds() {
        let throughput = TrimPolicy::throughput();
        // Below three samples nothing is trimmed
        assert_eq!(throughput.tail_count(0), 0);
        assert_eq!(throughput.tail_count(2), 0);
        // Small sets still drop at least one per tail
        assert_eq!(throughput.tail_count(3), 1);
        assert_eq!(throughput.tail_count(9), 1);
        // floor(n * 0.1) once it exceeds one
        assert_eq!(throughput.tail_count(10), 1);
        assert_eq!(throughput.tail_count(20), 2);
        assert_eq!(throughput.tail_count(35), 3);

        let latency = TrimPolicy::latency();
        assert_eq!(latency.tail_count(2), 0);
        assert_eq!(latency.tail_count(3), 1);
        assert_eq!(latency.tail_count(100), 1);
    }

    #[test]
    fn test_trimmed_mean_drops_extremes() {
        // 10 steady-state samples: trim one from each end, mean of 20..=90
        let samples = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
        let mean = SampleStatistics::trimmed_mean(&samples, TrimPolicy::throughput());
        assert!((mean - 55.0).abs() < f64::EPSILON);
        assert_eq!(SampleStatistics::max(&samples), 100.0);
    }

    #[test]
    fn test_trimmed_mean_latency_scenario() {
        // Ping samples with one congested outlier
        let samples = vec![50.0, 52.0, 48.0, 300.0, 51.0];
        let mean = SampleStatistics::trimmed_mean(&samples, TrimPolicy::latency());
        assert!((mean - 51.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_inputs_use_plain_mean() {
        let two = vec![10.0, 20.0];
        assert_eq!(
            SampleStatistics::trimmed_mean(&two, TrimPolicy::throughput()),
            15.0
        );
        assert_eq!(
            SampleStatistics::trimmed_mean(&two, TrimPolicy::latency()),
            15.0
        );

        let one = vec![42.0];
        assert_eq!(SampleStatistics::trimmed_mean(&one, TrimPolicy::latency()), 42.0);
    }

    #[test]
    fn test_trim_fallback_when_nothing_survives() {
        // Count policy aggressive enough to consume the whole set
        let samples = vec![1.0, 2.0, 3.0, 4.0];
        let mean = SampleStatistics::trimmed_mean(&samples, TrimPolicy::Count(2));
        assert_eq!(mean, 2.5);
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(SampleStatistics::trimmed_mean(&[], TrimPolicy::throughput()), 0.0);
        assert_eq!(SampleStatistics::max(&[]), 0.0);
        assert_eq!(SampleStatistics::mean(&[]), 0.0);
        assert_eq!(SampleStatistics::recent_mean(&[], 5), 0.0);
    }

    #[test]
    fn test_recent_mean_window() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        // Last five: 3..=7
        assert_eq!(SampleStatistics::recent_mean(&samples, 5), 5.0);
        // Window larger than the set averages everything
        assert_eq!(SampleStatistics::recent_mean(&samples, 50), 4.0);
    }

    #[test]
    fn test_max_ignores_trimming() {
        let samples = vec![5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 900.0];
        let mean = SampleStatistics::trimmed_mean(&samples, TrimPolicy::throughput());
        assert_eq!(mean, 5.0);
        assert_eq!(SampleStatistics::max(&samples), 900.0);
    }

    proptest! {
        #[test]
        fn trimmed_mean_invariant_under_reordering(
            mut samples in prop::collection::vec(0.0f64..10_000.0, 3..60),
            seed in any::<u64>(),
        ) {
            let original = SampleStatistics::trimmed_mean(&samples, TrimPolicy::throughput());

            // Deterministic shuffle driven by the seed
            let len = samples.len();
            let mut state = seed | 1;
            for i in (1..len).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state >> 33) as usize % (i + 1);
                samples.swap(i, j);
            }

            let shuffled = SampleStatistics::trimmed_mean(&samples, TrimPolicy::throughput());
            prop_assert!((original - shuffled).abs() < 1e-9);
        }

        #[test]
        fn trimmed_mean_bounded_by_extremes(
            samples in prop::collection::vec(0.0f64..10_000.0, 1..60),
        ) {
            let mean = SampleStatistics::trimmed_mean(&samples, TrimPolicy::throughput());
            let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
            let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(mean >= min - 1e-9 && mean <= max + 1e-9);
        }
    }
}
