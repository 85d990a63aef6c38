// Engine module - pure computation only (aggregation, formatting)
// This layer sits between raw run events and the runtime's delivery plumbing

pub mod aggregate;
pub mod summary;

pub use aggregate::aggregate_usage;
pub use summary::format_summary;
