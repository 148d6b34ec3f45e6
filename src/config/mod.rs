//! Configuration assembly: defaults, environment, CLI flags
//!
//! Precedence: built-in defaults, then a `.env` file / process
//! environment, then explicit flags. Environment variables are wired through clap's `env` attribute,
//! so this module only merges the parsed CLI into a `TestConfig` and runs
//! validation.

use crate::cli::Cli;
use crate::error::{AppError, Result};
use crate::models::TestConfig;

/// Load the effective configuration from CLI arguments and environment
pub fn load_config(cli: Cli) -> Result<TestConfig> {
    // A missing .env file is fine; a malformed one is a config error
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.into()),
    }

    cli.validate().map_err(AppError::validation)?;

    let mut config = TestConfig::default();

    if let Some(duration) = cli.duration {
        config.phase_budget_ms = duration;
    }
    if let Some(ping_count) = cli.ping_count {
        config.ping_count = ping_count;
    }
    if let Some(download_url) = cli.download_url {
        config.download_url = download_url;
    }
    if let Some(upload_url) = cli.upload_url {
        config.upload_url = upload_url;
    }
    if let Some(safety_timeout) = cli.safety_timeout {
        config.safety_timeout_secs = safety_timeout;
    }

    if cli.no_color {
        config.enable_color = false;
    } else if cli.color {
        config.enable_color = true;
    }
    config.verbose = cli.verbose;
    config.json_output = cli.json;

    config.validate()?;
    Ok(config)
}

/// One-line summary of the effective configuration, for verbose output
pub fn display_config_summary(config: &TestConfig) -> String {
    format!(
        "budget {}ms | {} pings @ {}ms | download {} | upload {} | safety timeout {}s",
        config.phase_budget_ms,
        config.ping_count,
        config.ping_interval_ms,
        config.download_url,
        config.upload_url,
        config.safety_timeout_secs,
    )
}
