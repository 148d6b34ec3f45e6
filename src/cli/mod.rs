//! Command-line interface

use clap::Parser;

/// Network Speed Tester - measures latency, download and upload throughput
#[derive(Parser, Debug, Clone)]
#[command(name = "nst")]
#[command(version, about, long_about = None)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIME"), ")"))]
pub struct Cli {
    /// Active duration of each throughput phase in milliseconds
    #[arg(short, long, env = "NST_DURATION_MS")]
    pub duration: Option<u64>,

    /// Number of latency probes
    #[arg(short, long, env = "NST_PING_COUNT")]
    pub ping_count: Option<u32>,

    /// Base URL serving `?bytes=N` payload requests
    #[arg(long, env = "NST_DOWNLOAD_URL")]
    pub download_url: Option<String>,

    /// URL accepting uploaded payload bytes
    #[arg(long, env = "NST_UPLOAD_URL")]
    pub upload_url: Option<String>,

    /// Per-request safety timeout in seconds
    #[arg(long, env = "NST_SAFETY_TIMEOUT_SECS")]
    pub safety_timeout: Option<u64>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Print the composite result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }
        if let Some(0) = self.duration {
            return Err("--duration must be non-zero".to_string());
        }
        if let Some(0) = self.ping_count {
            return Err("--ping-count must be non-zero".to_string());
        }
        Ok(())
    }
}
