//! Data models for configuration and measurement results

pub mod config;
pub mod results;

pub use config::{ChunkSizing, TestConfig};
pub use results::{CompositeResult, LatencyResult, ProgressEvent, SpeedResult};
