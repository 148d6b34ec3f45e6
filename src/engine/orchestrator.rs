//! Sequences the three measurement phases into one session

use crate::control::ControlSignal;
use crate::engine::{LatencyMeasurer, ThroughputMeasurer};
use crate::models::{CompositeResult, TestConfig};
use crate::progress::ProgressSink;
use crate::transport::TransferEndpoint;
use crate::types::Direction;

/// Runs latency, download and upload in fixed order and assembles the
/// composite result.
///
/// All three phases share one control signal, so a pause or stop issued by
/// the caller applies to whichever phase is active. Phases are
/// independent: an all-failed ping still lets the throughput phases run,
/// and a ping-only partial result is meaningful to the caller. Only a stop
/// or cancel skips the remaining phases.
pub struct TestOrchestrator<'a, T: TransferEndpoint + ?Sized> {
    endpoint: &'a T,
    config: &'a TestConfig,
}

impl<'a, T: TransferEndpoint + ?Sized> TestOrchestrator<'a, T> {
    pub fn new(endpoint: &'a T, config: &'a TestConfig) -> Self {
        Self { endpoint, config }
    }

    /// Run a full session. The signal must be fresh (or `reset`) when the
    /// session starts; it is owned by this session until the call returns.
    pub async fn run(&self, signal: &ControlSignal, sink: &dyn ProgressSink) -> CompositeResult {
        let ping = LatencyMeasurer::new(self.endpoint, self.config)
            .run(signal)
            .await;

        let download = if signal.is_stopped() {
            None
        } else {
            Some(
                ThroughputMeasurer::new(self.endpoint, self.config, Direction::Download)
                    .run(signal, sink)
                    .await,
            )
        };

        let upload = if signal.is_stopped() {
            None
        } else {
            Some(
                ThroughputMeasurer::new(self.endpoint, self.config, Direction::Upload)
                    .run(signal, sink)
                    .await,
            )
        };

        CompositeResult::new(Some(ping), download, upload)
    }
}
