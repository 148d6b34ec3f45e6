//! Latency (ping) phase

use crate::control::ControlSignal;
use crate::models::{LatencyResult, TestConfig};
use crate::stats::{SampleStatistics, TrimPolicy};
use crate::transport::TransferEndpoint;
use std::time::Instant;

/// Runs the round-trip latency phase against a transfer endpoint.
///
/// Issues a fixed number of minimal-payload probes spaced by a short
/// delay. Failed probes are silently excluded — no retry, the remaining
/// probes still run. With three or more usable samples the single lowest
/// and single highest are dropped before averaging, which keeps one
/// congested round trip from dominating a five-sample mean.
pub struct LatencyMeasurer<'a, T: TransferEndpoint + ?Sized> {
    endpoint: &'a T,
    config: &'a TestConfig,
}

impl<'a, T: TransferEndpoint + ?Sized> LatencyMeasurer<'a, T> {
    pub fn new(endpoint: &'a T, config: &'a TestConfig) -> Self {
        Self { endpoint, config }
    }

    /// Run the phase to completion or early exit via the control signal
    pub async fn run(&self, signal: &ControlSignal) -> LatencyResult {
        let mut samples: Vec<f64> = Vec::with_capacity(self.config.ping_count as usize);

        for i in 0..self.config.ping_count {
            let checkpoint = signal.checkpoint().await;
            if !checkpoint.proceed {
                break;
            }

            let start = Instant::now();
            let probe = tokio::select! {
                result = self.endpoint.ping() => Some(result),
                _ = signal.cancelled() => None,
            };

            match probe {
                Some(Ok(())) => {
                    samples.push(start.elapsed().as_secs_f64() * 1000.0);
                }
                // Failed probe: excluded, not retried
                Some(Err(_)) => {}
                // Cancelled mid-probe: report whatever we have
                None => break,
            }

            // No trailing delay after the final probe
            if i + 1 < self.config.ping_count && !signal.is_stopped() {
                tokio::time::sleep(self.config.ping_interval()).await;
            }
        }

        Self::reduce(&samples)
    }

    /// Reduce raw samples to the phase result
    fn reduce(samples: &[f64]) -> LatencyResult {
        if samples.is_empty() {
            return LatencyResult::no_data();
        }

        let average = SampleStatistics::trimmed_mean(samples, TrimPolicy::latency());
        LatencyResult {
            latency_ms: average.round() as u64,
            success: true,
        }
    }
}
