use runmeter_types::UsageCounters;
use serde_json::{Map, Value};

/// Fold a run's raw message records into a single [`UsageCounters`].
///
/// The upstream message schema is not under our control, so this is
/// deliberately total: any record that is not an object with
/// `role == "assistant"` is skipped, and any usage field that is
/// missing, non-numeric, non-finite, or negative contributes zero.
/// There is no error path.
pub fn aggregate_usage(events: &[Value]) -> UsageCounters {
    let mut totals = UsageCounters::default();

    for event in events {
        let Some(record) = event.as_object() else {
            continue;
        };
        if record.get("role").and_then(Value::as_str) != Some("assistant") {
            continue;
        }

        let usage = record.get("usage").and_then(Value::as_object);
        totals.input += counter_field(usage, "input");
        totals.output += counter_field(usage, "output");
        totals.cache_read += counter_field(usage, "cacheRead");
        totals.cache_write += counter_field(usage, "cacheWrite");
        totals.total_tokens += counter_field(usage, "totalTokens");
    }

    totals
}

/// Read one counter from a usage record, degrading to 0 on anything
/// that is not a non-negative finite number.
fn counter_field(usage: Option<&Map<String, Value>>, key: &str) -> f64 {
    usage
        .and_then(|u| u.get(key))
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assistant_event(input: u64, output: u64, cache_read: u64, cache_write: u64) -> Value {
        json!({
            "role": "assistant",
            "usage": {
                "input": input,
                "output": output,
                "cacheRead": cache_read,
                "cacheWrite": cache_write,
                "totalTokens": input + output + cache_read + cache_write,
            }
        })
    }

    #[test]
    fn test_empty_sequence_is_zero() {
        let counters = aggregate_usage(&[]);
        assert!(counters.is_empty());
    }

    #[test]
    fn test_single_assistant_event() {
        let events = vec![assistant_event(1000, 500, 200, 50)];
        let counters = aggregate_usage(&events);

        assert_eq!(counters.input, 1000.0);
        assert_eq!(counters.output, 500.0);
        assert_eq!(counters.cache_read, 200.0);
        assert_eq!(counters.cache_write, 50.0);
        assert_eq!(counters.total_tokens, 1750.0);
    }

    #[test]
    fn test_sums_across_events() {
        let events = vec![
            assistant_event(100, 10, 0, 0),
            assistant_event(200, 20, 50, 5),
        ];
        let counters = aggregate_usage(&events);

        assert_eq!(counters.input, 300.0);
        assert_eq!(counters.output, 30.0);
        assert_eq!(counters.cache_read, 50.0);
        assert_eq!(counters.cache_write, 5.0);
    }

    #[test]
    fn test_non_assistant_roles_skipped() {
        let events = vec![
            json!({"role": "user", "usage": {"input": 999, "output": 999}}),
            json!({"role": "system", "usage": {"output": 42}}),
            assistant_event(10, 5, 0, 0),
        ];
        let counters = aggregate_usage(&events);

        assert_eq!(counters.input, 10.0);
        assert_eq!(counters.output, 5.0);
    }

    #[test]
    fn test_malformed_events_contribute_zero() {
        let events = vec![
            json!(null),
            json!("just a string"),
            json!(42),
            json!(["an", "array"]),
            json!({"no_role": true}),
        ];
        let counters = aggregate_usage(&events);
        assert!(counters.is_empty());
    }

    #[test]
    fn test_missing_usage_record() {
        let events = vec![json!({"role": "assistant", "text": "hi"})];
        let counters = aggregate_usage(&events);
        assert!(counters.is_empty());
    }

    #[test]
    fn test_non_object_usage_record() {
        let events = vec![json!({"role": "assistant", "usage": "lots"})];
        let counters = aggregate_usage(&events);
        assert!(counters.is_empty());
    }

    #[test]
    fn test_bad_fields_degrade_to_zero() {
        let events = vec![json!({
            "role": "assistant",
            "usage": {
                "input": "not a number",
                "output": 50,
                "cacheRead": null,
                "cacheWrite": -7,
                // totalTokens missing entirely
            }
        })];
        let counters = aggregate_usage(&events);

        assert_eq!(counters.input, 0.0);
        assert_eq!(counters.output, 50.0);
        assert_eq!(counters.cache_read, 0.0);
        assert_eq!(counters.cache_write, 0.0);
        assert_eq!(counters.total_tokens, 0.0);
    }

    #[test]
    fn test_additive_over_concatenation() {
        let a = vec![assistant_event(100, 10, 20, 0), json!({"role": "user"})];
        let b = vec![assistant_event(50, 5, 0, 3)];

        let mut concat = a.clone();
        concat.extend(b.clone());

        let combined = aggregate_usage(&concat);
        let split = aggregate_usage(&a) + aggregate_usage(&b);
        assert_eq!(combined, split);
    }

    #[test]
    fn test_always_finite_and_non_negative() {
        let events = vec![
            json!({"role": "assistant", "usage": {"input": -1000, "output": 1.5e300}}),
            json!({"role": "assistant", "usage": {"cacheRead": 0.25}}),
        ];
        let counters = aggregate_usage(&events);

        for value in [
            counters.input,
            counters.output,
            counters.cache_read,
            counters.cache_write,
            counters.total_tokens,
        ] {
            assert!(value.is_finite());
            assert!(value >= 0.0);
        }
    }
}
