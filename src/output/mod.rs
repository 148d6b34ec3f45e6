//! Result formatting for console display and JSON export

use crate::error::Result;
use crate::models::{CompositeResult, LatencyResult, SpeedResult};
use colored::Colorize;

/// Formats composite results for the terminal
pub struct ResultFormatter {
    use_color: bool,
}

impl ResultFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Render the full composite result as display text
    pub fn format(&self, result: &CompositeResult) -> String {
        let mut lines = Vec::new();

        lines.push(self.heading("Speed Test Results"));
        lines.push(format!(
            "  Completed: {}",
            result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        lines.push(String::new());

        match &result.ping {
            Some(ping) => lines.push(format!("  Ping:     {}", self.format_latency(ping))),
            None => lines.push(format!("  Ping:     {}", self.muted("skipped"))),
        }
        match &result.download {
            Some(download) => {
                lines.push(format!("  Download: {}", self.format_speed(download)))
            }
            None => lines.push(format!("  Download: {}", self.muted("skipped"))),
        }
        match &result.upload {
            Some(upload) => lines.push(format!("  Upload:   {}", self.format_speed(upload))),
            None => lines.push(format!("  Upload:   {}", self.muted("skipped"))),
        }

        lines.join("\n")
    }

    /// Render one latency result
    pub fn format_latency(&self, result: &LatencyResult) -> String {
        if !result.success {
            return self.failure("no usable samples");
        }
        let value = format!("{} ms", result.latency_ms);
        if self.use_color {
            value.green().bold().to_string()
        } else {
            value
        }
    }

    /// Render one throughput result
    pub fn format_speed(&self, result: &SpeedResult) -> String {
        if !result.success {
            return self.failure("no usable samples");
        }
        let value = format!(
            "{:.1} Mbps (peak {:.1} Mbps, {:.1} MB in {:.1}s)",
            result.average_mbps,
            result.max_mbps,
            result.total_bytes as f64 / 1_000_000.0,
            result.duration.as_secs_f64(),
        );
        if self.use_color {
            value.green().bold().to_string()
        } else {
            value
        }
    }

    /// Serialize the composite result as pretty JSON
    pub fn format_json(&self, result: &CompositeResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    fn heading(&self, text: &str) -> String {
        if self.use_color {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }

    fn muted(&self, text: &str) -> String {
        if self.use_color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn failure(&self, text: &str) -> String {
        if self.use_color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}
