//! Type definitions and aliases

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Direction of a throughput measurement phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Bytes flow from the remote endpoint to us
    Download,
    /// Bytes flow from us to the remote endpoint
    Upload,
}

impl Direction {
    /// Get the progress label shown while this phase runs
    pub fn phase_label(&self) -> &'static str {
        match self {
            Direction::Download => "Downloading...",
            Direction::Upload => "Uploading...",
        }
    }
}
