use anyhow::Result;
use runmeter_types::Severity;

/// Host-provided channel that carries a notification line to the user.
pub trait NotificationSink {
    fn notify(&self, text: &str, severity: Severity) -> Result<()>;
}

/// Delivery information supplied by the host alongside a run-end signal.
#[derive(Clone, Copy)]
pub struct DeliveryContext<'a> {
    /// Whether there is anywhere to show a notification right now.
    /// When false the run is still closed out, but nothing is sent.
    pub has_active_destination: bool,
    pub sink: &'a dyn NotificationSink,
}
