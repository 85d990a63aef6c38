use crate::delivery::DeliveryContext;
use anyhow::Result;
use chrono::{DateTime, Utc};
use runmeter_engine::{aggregate_usage, format_summary};
use runmeter_types::{NotifyOptions, Severity};
use serde_json::Value;

/// Tracks the single in-flight run and turns its message stream into at
/// most one summary notification when it ends.
///
/// Two states: idle (no start captured) and running. A start signal
/// while already running re-arms the start instant (last start wins);
/// an end signal always returns the tracker to idle, whether or not a
/// notification is sent. Callers pass the wall-clock instant in, so the
/// tracker itself never reads a clock.
pub struct RunTracker {
    options: NotifyOptions,
    run_start: Option<DateTime<Utc>>,
}

impl RunTracker {
    pub fn new(options: NotifyOptions) -> Self {
        Self {
            options,
            run_start: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_start.is_some()
    }

    /// Handle a run-start signal.
    pub fn on_run_start(&mut self, now: DateTime<Utc>) {
        self.run_start = Some(now);
    }

    /// Handle a run-end signal carrying the run's message sequence.
    ///
    /// Sends exactly one info notification for a qualifying run, and
    /// nothing otherwise. Suppression (no start captured, no active
    /// destination, non-positive elapsed time, thresholds not met) is
    /// normal control flow, not an error; `Err` only surfaces sink
    /// failures.
    pub fn on_run_end(
        &mut self,
        now: DateTime<Utc>,
        events: &[Value],
        ctx: DeliveryContext,
    ) -> Result<()> {
        let Some(start) = self.run_start.take() else {
            return Ok(());
        };

        if !ctx.has_active_destination {
            return Ok(());
        }

        let elapsed_secs = (now - start).num_milliseconds() as f64 / 1000.0;
        if elapsed_secs <= 0.0 {
            return Ok(());
        }

        let usage = aggregate_usage(events);
        if usage.output < self.options.min_output_tokens as f64 {
            return Ok(());
        }
        if elapsed_secs < self.options.min_seconds {
            return Ok(());
        }

        let line = format_summary(elapsed_secs, &usage, &self.options);
        ctx.sink.notify(&line, Severity::Info)
    }
}
