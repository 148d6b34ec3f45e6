//! Network Speed Tester
//!
//! An adaptive network speed testing engine that measures round-trip
//! latency, download throughput and upload throughput against a remote
//! transfer endpoint, producing outlier-trimmed speed estimates with live
//! progress reporting and cooperative pause/resume/stop control.

pub mod app;
pub mod cli;
pub mod config;
pub mod control;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod payload;
pub mod progress;
pub mod sizing;
pub mod stats;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use control::{ControlSignal, PhaseClock};
pub use engine::{LatencyMeasurer, TestOrchestrator, ThroughputMeasurer};
pub use error::{AppError, Result};
pub use models::{ChunkSizing, CompositeResult, LatencyResult, ProgressEvent, SpeedResult, TestConfig};
pub use progress::{NullSink, ProgressSink};
pub use sizing::ChunkSizePolicy;
pub use stats::{SampleStatistics, TrimPolicy};
pub use transport::{HttpTransport, TransferEndpoint};
pub use types::Direction;
