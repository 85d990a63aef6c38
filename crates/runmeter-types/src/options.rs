use serde::{Deserialize, Serialize};

/// Notification behavior for run summaries.
///
/// Supplied once at setup (usually from the `[notify]` table of the
/// config file) and reused for every run. Every field has a default so a
/// partial table deserializes cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyOptions {
    /// Suppress the notification when the run produced fewer output
    /// tokens than this.
    pub min_output_tokens: u64,
    /// Suppress the notification for runs shorter than this many seconds.
    pub min_seconds: f64,
    /// Decimal places for the throughput and elapsed-time figures.
    pub precision: usize,
    /// Include the cache read/write and cache-hit-rate segments.
    pub show_cache: bool,
    /// Include the total-token and output/input-ratio segments.
    pub show_totals: bool,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self {
            min_output_tokens: 1,
            min_seconds: 0.0,
            precision: 1,
            show_cache: true,
            show_totals: true,
        }
    }
}
