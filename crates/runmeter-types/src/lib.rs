pub mod options;
pub mod severity;
pub mod usage;

pub use options::NotifyOptions;
pub use severity::Severity;
pub use usage::UsageCounters;
