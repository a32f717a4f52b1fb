//! Metrics collection.
//!
//! # Metrics
//! - `console_navigations_total` (counter): navigations by outcome
//! - `console_navigation_duration_seconds` (histogram): time from request to commit
//! - `console_guard_decisions_total` (counter): guard decisions by kind
//! - `console_view_loads_total` (counter): view cache lookups by result

use std::time::Duration;

pub fn record_navigation(outcome: &'static str, elapsed: Duration) {
    ::metrics::counter!("console_navigations_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("console_navigation_duration_seconds", "outcome" => outcome)
        .record(elapsed.as_secs_f64());
}

pub fn record_guard_decision(decision: &'static str) {
    ::metrics::counter!("console_guard_decisions_total", "decision" => decision).increment(1);
}

pub fn record_view_load(result: &'static str) {
    ::metrics::counter!("console_view_loads_total", "result" => result).increment(1);
}
