pub mod config;
pub mod delivery;
pub mod error;
pub mod tracker;

pub use config::Config;
pub use delivery::{DeliveryContext, NotificationSink};
pub use error::{Error, Result};
pub use tracker::RunTracker;
