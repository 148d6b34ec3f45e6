//! Adaptive chunk sizing for throughput phases
//!
//! Each throughput chunk is an independent HTTP transfer, so small chunks
//! on a fast link spend most of their wall-clock time on request overhead.
//! The policy grows the request size in response to observed speed:
//! aggressively during the warm-up chunks, conservatively afterwards.
//! Sizes never shrink within a phase and never exceed the configured
//! maximum.

use crate::types::Direction;

/// Number of leading chunks treated as warm-up by default
pub const DEFAULT_WARMUP_CHUNKS: u32 = 2;

/// Growth thresholds for one sizing branch, checked highest first
#[derive(Debug, Clone, Copy)]
struct GrowthRule {
    /// Instantaneous speed above which this rule fires (Mbps)
    min_mbps: f64,
    /// Multiplier applied to the current chunk size
    factor: f64,
}

/// Maps the latest instantaneous speed observation to the next chunk size.
///
/// Holds separate rule tables for the warm-up and steady-state portions of
/// a phase, tuned per transfer direction. Upload rules are gentler than
/// download rules since request bodies are buffered in memory before send.
#[derive(Debug, Clone)]
pub struct ChunkSizePolicy {
    current_size: u64,
    max_size: u64,
    warmup_rules: Vec<GrowthRule>,
    steady_rules: Vec<GrowthRule>,
}

impl ChunkSizePolicy {
    /// Create a policy with explicit bounds and the standard rule tables
    /// for the given direction.
    pub fn new(direction: Direction, initial_size: u64, max_size: u64) -> Self {
        let (warmup_rules, steady_rules) = match direction {
            Direction::Download => (
                vec![GrowthRule { min_mbps: 20.0, factor: 4.0 }],
                vec![
                    GrowthRule { min_mbps: 100.0, factor: 2.0 },
                    GrowthRule { min_mbps: 50.0, factor: 1.5 },
                ],
            ),
            Direction::Upload => (
                vec![GrowthRule { min_mbps: 30.0, factor: 2.0 }],
                vec![
                    GrowthRule { min_mbps: 50.0, factor: 1.5 },
                    GrowthRule { min_mbps: 20.0, factor: 1.25 },
                ],
            ),
        };

        Self {
            current_size: initial_size.min(max_size),
            max_size,
            warmup_rules,
            steady_rules,
        }
    }

    /// Create a download policy with the default bounds (1 MB to 50 MB)
    pub fn download_defaults() -> Self {
        Self::new(Direction::Download, 1_000_000, 50_000_000)
    }

    /// Create an upload policy with the default bounds (100 KB to 10 MB)
    pub fn upload_defaults() -> Self {
        Self::new(Direction::Upload, 100_000, 10_000_000)
    }

    /// Byte count to request for the next chunk
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    /// Configured upper bound
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Feed a warm-up speed observation (Mbps) and grow the next size
    pub fn observe_warmup(&mut self, mbps: f64) {
        self.apply_rules_warmup(mbps)
    }

    /// Feed a steady-state speed observation (Mbps) and grow the next size
    pub fn observe_steady(&mut self, mbps: f64) {
        self.apply_rules_steady(mbps)
    }

    fn apply_rules_warmup(&mut self, mbps: f64) {
        let rule = Self::matching_rule(&self.warmup_rules, mbps);
        if let Some(rule) = rule {
            self.grow(rule.factor);
        }
    }

    fn apply_rules_steady(&mut self, mbps: f64) {
        let rule = Self::matching_rule(&self.steady_rules, mbps);
        if let Some(rule) = rule {
            self.grow(rule.factor);
        }
    }

    fn matching_rule(rules: &[GrowthRule], mbps: f64) -> Option<GrowthRule> {
        rules.iter().copied().find(|rule| mbps > rule.min_mbps)
    }

    /// Multiply the current size, flooring to integer bytes and clamping
    /// to the maximum. Growth only happens while below the maximum.
    fn grow(&mut self, factor: f64) {
        if self.current_size >= self.max_size {
            return;
        }
        let grown = (self.current_size as f64 * factor) as u64;
        self.current_size = grown.min(self.max_size);
    }
}
