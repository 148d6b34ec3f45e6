//! Time-boxed throughput phase with adaptive chunk sizing

use crate::control::{ControlSignal, PhaseClock};
use crate::models::{ProgressEvent, SpeedResult, TestConfig};
use crate::payload::PayloadGenerator;
use crate::progress::ProgressSink;
use crate::sizing::ChunkSizePolicy;
use crate::stats::{SampleStatistics, TrimPolicy};
use crate::transport::TransferEndpoint;
use crate::types::Direction;
use bytes::Bytes;
use std::time::Instant;

/// Number of trailing samples averaged for the live progress figure
const PROGRESS_WINDOW: usize = 5;

/// Runs one throughput phase (download or upload) against an endpoint.
///
/// The loop transfers one chunk at a time inside an active wall-clock
/// budget, excluding paused intervals. The first chunks are warm-up: their
/// speeds steer chunk sizing but never enter the statistics. A failed
/// transfer is excluded and the loop moves on; there is no retry of a
/// chunk slot. The final speed figure is the outlier-trimmed mean of the
/// steady-state samples, with the untrimmed maximum reported alongside.
pub struct ThroughputMeasurer<'a, T: TransferEndpoint + ?Sized> {
    endpoint: &'a T,
    config: &'a TestConfig,
    direction: Direction,
}

impl<'a, T: TransferEndpoint + ?Sized> ThroughputMeasurer<'a, T> {
    pub fn new(endpoint: &'a T, config: &'a TestConfig, direction: Direction) -> Self {
        Self {
            endpoint,
            config,
            direction,
        }
    }

    /// Run the phase to completion, stop, or cancellation. Always returns
    /// the best-available result; an empty sample set reports
    /// `success = false` with zeroed figures.
    pub async fn run(&self, signal: &ControlSignal, sink: &dyn ProgressSink) -> SpeedResult {
        let sizing = self.config.sizing_for(self.direction);
        let mut policy =
            ChunkSizePolicy::new(self.direction, sizing.initial_bytes, sizing.max_bytes);
        let mut generator = PayloadGenerator::new();

        let budget = self.config.phase_budget();
        let noise_floor = self.config.noise_floor();

        let mut clock = PhaseClock::start();
        let mut samples: Vec<f64> = Vec::new();
        let mut total_bytes: u64 = 0;
        let mut chunk_index: u32 = 0;

        while clock.active_elapsed() < budget {
            let checkpoint = signal.checkpoint().await;
            clock.note_pause(checkpoint.paused_for);
            if !checkpoint.proceed {
                break;
            }

            let chunk_size = policy.current_size();

            // Payload generation happens outside the timed window; only
            // the transfer itself is measured.
            let payload = match self.direction {
                Direction::Upload => Some(generator.generate(chunk_size as usize)),
                Direction::Download => None,
            };

            let started = Instant::now();
            let outcome = tokio::select! {
                result = self.transfer(chunk_size, payload) => Some(result),
                _ = signal.cancelled() => None,
            };
            let elapsed = started.elapsed();
            chunk_index += 1;

            let bytes_moved = match outcome {
                Some(Ok(bytes)) => bytes,
                Some(Err(_)) => {
                    // Transient sample failure: nothing recorded, no retry
                    self.emit_progress(sink, &samples, &clock);
                    continue;
                }
                // Cancelled mid-transfer: report the partial result
                None => break,
            };

            let is_warmup = chunk_index <= self.config.warmup_chunks;
            if !is_warmup {
                total_bytes += bytes_moved;
            }

            // Below the noise floor a chunk's timing is dominated by
            // request overhead; its speed is unusable even for sizing.
            if elapsed > noise_floor {
                let mbps = (bytes_moved as f64 * 8.0) / (elapsed.as_secs_f64() * 1_000_000.0);
                if is_warmup {
                    policy.observe_warmup(mbps);
                } else {
                    samples.push(mbps);
                    policy.observe_steady(mbps);
                }
            }

            self.emit_progress(sink, &samples, &clock);
        }

        let duration = clock.active_elapsed();
        if samples.is_empty() {
            return SpeedResult::no_data(duration);
        }

        SpeedResult {
            average_mbps: SampleStatistics::trimmed_mean(&samples, TrimPolicy::throughput()),
            max_mbps: SampleStatistics::max(&samples),
            total_bytes,
            duration,
            success: true,
        }
    }

    /// Perform one chunk transfer, returning the bytes moved
    async fn transfer(&self, chunk_size: u64, payload: Option<Bytes>) -> crate::error::Result<u64> {
        match self.direction {
            Direction::Download => self.endpoint.download(chunk_size).await,
            Direction::Upload => {
                let payload = payload.unwrap_or_default();
                let sent = payload.len() as u64;
                self.endpoint.upload(payload).await?;
                Ok(sent)
            }
        }
    }

    fn emit_progress(&self, sink: &dyn ProgressSink, samples: &[f64], clock: &PhaseClock) {
        let budget = self.config.phase_budget();
        let ratio = clock.active_elapsed().as_secs_f64() / budget.as_secs_f64();
        let percent = (ratio * 100.0).round().min(100.0) as u8;

        sink.report(ProgressEvent {
            current_mbps: SampleStatistics::recent_mean(samples, PROGRESS_WINDOW),
            percent_complete: percent,
            phase_label: self.direction.phase_label().to_string(),
        });
    }
}
