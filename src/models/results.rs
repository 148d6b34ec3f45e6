//! Measurement result data models

use serde::{Deserialize, Serialize};
use std::time::Duration;
use chrono::{DateTime, Utc};

/// Result of the latency (ping) phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyResult {
    /// Rounded average round-trip time of the surviving samples
    pub latency_ms: u64,

    /// False iff zero usable samples were collected
    pub success: bool,
}

impl LatencyResult {
    /// Result for a phase that collected no usable samples
    pub fn no_data() -> Self {
        Self {
            latency_ms: 0,
            success: false,
        }
    }
}

/// Result of one throughput phase (download or upload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedResult {
    /// Outlier-trimmed average speed in Mbps
    pub average_mbps: f64,

    /// Best observed instantaneous speed in Mbps (untrimmed)
    pub max_mbps: f64,

    /// Steady-state bytes transferred (warm-up chunks excluded)
    pub total_bytes: u64,

    /// Active phase duration, excluding paused intervals
    pub duration: Duration,

    /// False iff zero usable samples were collected
    pub success: bool,
}

impl SpeedResult {
    /// Result for a phase that collected no usable samples
    pub fn no_data(duration: Duration) -> Self {
        Self {
            average_mbps: 0.0,
            max_mbps: 0.0,
            total_bytes: 0,
            duration,
            success: false,
        }
    }
}

/// Live progress snapshot emitted during a throughput phase.
/// Transient: consumed for display, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Mean of the most recent speed samples in Mbps (0 until one exists)
    pub current_mbps: f64,

    /// Active elapsed time as a share of the phase budget, 0..=100
    pub percent_complete: u8,

    /// Phase label, e.g. "Downloading..."
    pub phase_label: String,
}

/// Composite result of a full test session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeResult {
    /// Latency phase result, if the phase was reached
    pub ping: Option<LatencyResult>,

    /// Download phase result, if the phase was reached
    pub download: Option<SpeedResult>,

    /// Upload phase result, if the phase was reached
    pub upload: Option<SpeedResult>,

    /// When the session's results were assembled
    pub timestamp: DateTime<Utc>,
}

impl CompositeResult {
    /// Assemble a composite result stamped with the current time
    pub fn new(
        ping: Option<LatencyResult>,
        download: Option<SpeedResult>,
        upload: Option<SpeedResult>,
    ) -> Self {
        Self {
            ping,
            download,
            upload,
            timestamp: Utc::now(),
        }
    }

    /// True if at least one phase produced usable data
    pub fn any_success(&self) -> bool {
        self.ping.as_ref().is_some_and(|p| p.success)
            || self.download.as_ref().is_some_and(|d| d.success)
            || self.upload.as_ref().is_some_and(|u| u.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_results_are_zeroed() {
        let latency = LatencyResult::no_data();
        assert_eq!(latency.latency_ms, 0);
        assert!(!latency.success);

        let speed = SpeedResult::no_data(Duration::from_secs(10));
        assert_eq!(speed.average_mbps, 0.0);
        assert_eq!(speed.max_mbps, 0.0);
        assert_eq!(speed.total_bytes, 0);
        assert_eq!(speed.duration, Duration::from_secs(10));
        assert!(!speed.success);
    }

    #[test]
    fn test_any_success() {
        let none = CompositeResult::new(None, None, None);
        assert!(!none.any_success());

        let failed = CompositeResult::new(
            Some(LatencyResult::no_data()),
            Some(SpeedResult::no_data(Duration::ZERO)),
            None,
        );
        assert!(!failed.any_success());

        let ping_only = CompositeResult::new(
            Some(LatencyResult {
                latency_ms: 20,
                success: true,
            }),
            Some(SpeedResult::no_data(Duration::ZERO)),
            None,
        );
        assert!(ping_only.any_success());
    }

    #[test]
    fn test_json_round_trip() {
        let result = CompositeResult::new(
            Some(LatencyResult {
                latency_ms: 51,
                success: true,
            }),
            None,
            None,
        );
        let json = serde_json::to_string(&result).unwrap();
        let parsed: CompositeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ping, result.ping);
    }
}
