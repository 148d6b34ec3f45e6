//! Configuration data model and validation

use crate::error::{AppError, Result};
use crate::types::Direction;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Chunk size bounds for one throughput direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSizing {
    /// Size of the first chunk request in bytes
    pub initial_bytes: u64,

    /// Upper bound a chunk request may grow to
    pub max_bytes: u64,
}

impl ChunkSizing {
    /// Default download bounds: 1 MB growing up to 50 MB
    pub fn download_defaults() -> Self {
        Self {
            initial_bytes: 1_000_000,
            max_bytes: 50_000_000,
        }
    }

    /// Default upload bounds: 100 KB growing up to 10 MB
    pub fn upload_defaults() -> Self {
        Self {
            initial_bytes: 100_000,
            max_bytes: 10_000_000,
        }
    }
}

/// Main test configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfig {
    /// Base URL serving `?bytes=N` payload requests (latency and download)
    #[serde(default = "default_download_url")]
    pub download_url: String,

    /// URL accepting uploaded payload bytes
    #[serde(default = "default_upload_url")]
    pub upload_url: String,

    /// Number of latency probes per session
    #[serde(default = "default_ping_count")]
    pub ping_count: u32,

    /// Delay between consecutive latency probes in milliseconds
    #[serde(default = "default_ping_interval_ms")]
    pub ping_interval_ms: u64,

    /// Active wall-clock budget per throughput phase in milliseconds
    #[serde(default = "default_phase_budget_ms")]
    pub phase_budget_ms: u64,

    /// Leading chunks excluded from statistics while sizing converges
    #[serde(default = "default_warmup_chunks")]
    pub warmup_chunks: u32,

    /// Minimum chunk elapsed time for a usable speed sample, milliseconds
    #[serde(default = "default_noise_floor_ms")]
    pub noise_floor_ms: u64,

    /// Per-request safety timeout in seconds, independent of phase budget
    #[serde(default = "default_safety_timeout_secs")]
    pub safety_timeout_secs: u64,

    /// Download chunk size bounds
    #[serde(default = "ChunkSizing::download_defaults")]
    pub download_sizing: ChunkSizing,

    /// Upload chunk size bounds
    #[serde(default = "ChunkSizing::upload_defaults")]
    pub upload_sizing: ChunkSizing,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Emit the composite result as JSON instead of formatted text
    #[serde(default)]
    pub json_output: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            download_url: default_download_url(),
            upload_url: default_upload_url(),
            ping_count: default_ping_count(),
            ping_interval_ms: default_ping_interval_ms(),
            phase_budget_ms: default_phase_budget_ms(),
            warmup_chunks: default_warmup_chunks(),
            noise_floor_ms: default_noise_floor_ms(),
            safety_timeout_secs: default_safety_timeout_secs(),
            download_sizing: ChunkSizing::download_defaults(),
            upload_sizing: ChunkSizing::upload_defaults(),
            enable_color: default_enable_color(),
            verbose: false,
            json_output: false,
        }
    }
}

impl TestConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the phase budget as Duration
    pub fn phase_budget(&self) -> Duration {
        Duration::from_millis(self.phase_budget_ms)
    }

    /// Get the inter-ping delay as Duration
    pub fn ping_interval(&self) -> Duration {
        Duration::from_millis(self.ping_interval_ms)
    }

    /// Get the noise floor as Duration
    pub fn noise_floor(&self) -> Duration {
        Duration::from_millis(self.noise_floor_ms)
    }

    /// Get the per-request safety timeout as Duration
    pub fn safety_timeout(&self) -> Duration {
        Duration::from_secs(self.safety_timeout_secs)
    }

    /// Chunk bounds for the given direction
    pub fn sizing_for(&self, direction: Direction) -> ChunkSizing {
        match direction {
            Direction::Download => self.download_sizing,
            Direction::Upload => self.upload_sizing,
        }
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        for (label, url) in [
            ("download", &self.download_url),
            ("upload", &self.upload_url),
        ] {
            if url.is_empty() {
                return Err(AppError::config(format!("{} URL cannot be empty", label)));
            }
            if let Err(e) = url::Url::parse(url) {
                return Err(AppError::config(format!("Invalid {} URL '{}': {}", label, url, e)));
            }
        }

        if self.ping_count == 0 {
            return Err(AppError::config("Ping count must be at least 1"));
        }

        if self.phase_budget_ms == 0 {
            return Err(AppError::config("Phase budget must be non-zero"));
        }

        for (label, sizing) in [
            ("download", self.download_sizing),
            ("upload", self.upload_sizing),
        ] {
            if sizing.initial_bytes == 0 {
                return Err(AppError::config(format!(
                    "{} initial chunk size must be non-zero",
                    label
                )));
            }
            if sizing.max_bytes < sizing.initial_bytes {
                return Err(AppError::config(format!(
                    "{} max chunk size ({}) is below the initial size ({})",
                    label, sizing.max_bytes, sizing.initial_bytes
                )));
            }
        }

        if self.safety_timeout_secs == 0 {
            return Err(AppError::config("Safety timeout must be non-zero"));
        }

        Ok(())
    }

    /// Collect non-fatal configuration concerns worth telling the user
    pub fn validation_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.phase_budget_ms < 3_000 {
            warnings.push(format!(
                "Phase budget of {}ms is short; speed estimates may be noisy",
                self.phase_budget_ms
            ));
        }
        if self.phase_budget_ms > 60_000 {
            warnings.push(format!(
                "Phase budget of {}ms will transfer a lot of data",
                self.phase_budget_ms
            ));
        }
        if self.ping_count > 20 {
            warnings.push(format!(
                "{} latency probes will noticeably delay the throughput phases",
                self.ping_count
            ));
        }
        if self.safety_timeout() <= self.phase_budget() {
            warnings.push(
                "Safety timeout is within the phase budget; slow transfers may be cut short"
                    .to_string(),
            );
        }
        if self.warmup_chunks == 0 {
            warnings.push("No warm-up chunks; early ramp-up samples will skew results".to_string());
        }

        warnings
    }
}

fn default_download_url() -> String {
    "https://speed.cloudflare.com/__down".to_string()
}

fn default_upload_url() -> String {
    "https://speed.cloudflare.com/__up".to_string()
}

fn default_ping_count() -> u32 {
    5
}

fn default_ping_interval_ms() -> u64 {
    200
}

fn default_phase_budget_ms() -> u64 {
    10_000
}

fn default_warmup_chunks() -> u32 {
    2
}

fn default_noise_floor_ms() -> u64 {
    10
}

fn default_safety_timeout_secs() -> u64 {
    120
}

fn default_enable_color() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = TestConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ping_count, 5);
        assert_eq!(config.phase_budget(), Duration::from_secs(10));
        assert_eq!(config.warmup_chunks, 2);
        assert_eq!(config.noise_floor(), Duration::from_millis(10));
        assert_eq!(config.safety_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_invalid_urls_rejected() {
        let mut config = TestConfig::default();
        config.download_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = TestConfig::default();
        config.upload_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = TestConfig::default();
        config.ping_count = 0;
        assert!(config.validate().is_err());

        let mut config = TestConfig::default();
        config.phase_budget_ms = 0;
        assert!(config.validate().is_err());

        let mut config = TestConfig::default();
        config.safety_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_chunk_bounds_rejected() {
        let mut config = TestConfig::default();
        config.download_sizing = ChunkSizing {
            initial_bytes: 1_000_000,
            max_bytes: 100,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sizing_for_direction() {
        let config = TestConfig::default();
        assert_eq!(
            config.sizing_for(Direction::Download),
            ChunkSizing::download_defaults()
        );
        assert_eq!(
            config.sizing_for(Direction::Upload),
            ChunkSizing::upload_defaults()
        );
    }

    #[test]
    fn test_short_budget_warns() {
        let mut config = TestConfig::default();
        config.phase_budget_ms = 1_000;
        let warnings = config.validation_warnings();
        assert!(warnings.iter().any(|w| w.contains("noisy")));
    }

    #[test]
    fn test_defaults_have_no_warnings() {
        assert!(TestConfig::default().validation_warnings().is_empty());
    }
}
