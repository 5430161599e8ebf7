//! Action metrics.
//!
//! # Metrics
//! - `svm_actions_invocations_total` (counter): invocations by action, outcome
//! - `svm_actions_invocation_duration_seconds` (histogram): latency by action

use std::time::Instant;

/// Record one finished action invocation.
pub fn record_action(action: &str, outcome: &'static str, started: Instant) {
    let action = action.to_string();
    metrics::counter!(
        "svm_actions_invocations_total",
        "action" => action.clone(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("svm_actions_invocation_duration_seconds", "action" => action)
        .record(started.elapsed().as_secs_f64());
}
