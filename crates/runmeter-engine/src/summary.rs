use runmeter_types::{NotifyOptions, UsageCounters};

// Floor for the elapsed-time divisor; keeps the throughput finite when
// a run's elapsed time rounds to zero.
const MIN_ELAPSED_SECS: f64 = 1e-9;

/// Render one run's counters and elapsed time as a single summary line.
///
/// Segments are produced in a fixed order and joined with `", "`:
/// throughput, output, input, [cache r/w, [cache%]], [total, [o/i]],
/// elapsed seconds. The bracketed segments are gated by
/// [`NotifyOptions::show_cache`] / [`NotifyOptions::show_totals`], and
/// the inner ones additionally by their denominators being non-zero; a
/// zero denominator omits the segment rather than printing 0% or N/A.
///
/// Deterministic and pure: same inputs, same string.
pub fn format_summary(elapsed_secs: f64, usage: &UsageCounters, opts: &NotifyOptions) -> String {
    let tps = usage.output / elapsed_secs.max(MIN_ELAPSED_SECS);

    let mut parts = vec![
        format!("TPS {:.prec$} tok/s", tps, prec = opts.precision),
        format!("out {}", format_count(usage.output)),
        format!("in {}", format_count(usage.input)),
    ];

    if opts.show_cache {
        parts.push(format!(
            "cache r/w {}/{}",
            format_count(usage.cache_read),
            format_count(usage.cache_write)
        ));

        let cache_denominator = usage.input + usage.cache_read;
        if cache_denominator > 0.0 {
            let hit_rate = usage.cache_read / cache_denominator * 100.0;
            parts.push(format!("cache% {:.0}%", hit_rate));
        }
    }

    if opts.show_totals {
        parts.push(format!("total {}", format_count(usage.total_tokens)));

        if usage.input > 0.0 {
            parts.push(format!("o/i {:.2}", usage.output / usage.input));
        }
    }

    parts.push(format!("{:.prec$}s", elapsed_secs, prec = opts.precision));

    parts.join(", ")
}

/// Truncate toward zero, then group digits with commas.
fn format_count(n: f64) -> String {
    format_with_commas(n as u64)
}

fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
