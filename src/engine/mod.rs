//! The adaptive measurement engine
//!
//! Three phases run against a [`crate::transport::TransferEndpoint`]:
//! latency sampling, a time-boxed download loop, and a time-boxed upload
//! loop, sequenced by the orchestrator. Phase APIs are infallible — every
//! failure mode (failed probes, timeouts, stop, cancel) surfaces as a
//! result with `success = false` or partial data, never as an error the
//! caller must handle.

pub mod latency;
pub mod orchestrator;
pub mod throughput;

pub use latency::LatencyMeasurer;
pub use orchestrator::TestOrchestrator;
pub use throughput::ThroughputMeasurer;
