use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Token counters accumulated over one run.
///
/// A pure additive accumulator: created zero-valued, mutated only by
/// addition, discarded after the run's summary is produced. All fields
/// are kept non-negative and finite by the aggregation layer.
///
/// Counts are `f64` rather than integers because upstream usage records
/// are not schema-controlled; values are read as arbitrary JSON numbers
/// and only truncated to integers at display time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageCounters {
    /// Fresh (uncached) input tokens
    pub input: f64,
    /// Generated output tokens
    pub output: f64,
    /// Input tokens served from cache
    pub cache_read: f64,
    /// Input tokens written to cache
    pub cache_write: f64,
    /// Total tokens as reported upstream
    pub total_tokens: f64,
}

impl UsageCounters {
    pub fn is_empty(&self) -> bool {
        self.input == 0.0
            && self.output == 0.0
            && self.cache_read == 0.0
            && self.cache_write == 0.0
            && self.total_tokens == 0.0
    }
}

impl Add for UsageCounters {
    type Output = UsageCounters;

    fn add(self, rhs: UsageCounters) -> UsageCounters {
        UsageCounters {
            input: self.input + rhs.input,
            output: self.output + rhs.output,
            cache_read: self.cache_read + rhs.cache_read,
            cache_write: self.cache_write + rhs.cache_write,
            total_tokens: self.total_tokens + rhs.total_tokens,
        }
    }
}

impl AddAssign for UsageCounters {
    fn add_assign(&mut self, rhs: UsageCounters) {
        *self = *self + rhs;
    }
}
