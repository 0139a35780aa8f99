//! Execution-outcome counters owned by the circuit breaker.
//!
//! A small named-metric accumulator. The known metrics are `executions`,
//! `successes`, and `failures`, but any metric name may be incremented;
//! unseen names are created at zero. The breaker increments `executions`
//! together with exactly one of `successes`/`failures` on every recorded
//! outcome, so `executions == successes + failures` holds as long as the
//! breaker is the sole writer.

use std::collections::HashMap;

use serde::Serialize;

use crate::constants::{METRIC_EXECUTIONS, METRIC_FAILURES, METRIC_SUCCESSES};

/// Named-metric accumulator.
///
/// Mutated only under the breaker's lock; not a public type.
#[derive(Debug)]
pub(crate) struct Stats {
    counts: HashMap<String, u64>,
}

impl Stats {
    /// Create stats with the known metrics pre-seeded at zero.
    pub(crate) fn new() -> Self {
        let mut counts = HashMap::new();
        counts.insert(METRIC_EXECUTIONS.to_string(), 0);
        counts.insert(METRIC_SUCCESSES.to_string(), 0);
        counts.insert(METRIC_FAILURES.to_string(), 0);
        Self { counts }
    }

    /// Add 1 to the named metric, creating it at zero if unseen.
    ///
    /// A metric sitting at `u64::MAX` is reset to zero before the add, so
    /// the result is 1 rather than a wrapped or saturated value.
    pub(crate) fn increment(&mut self, name: &str) {
        let count = self.counts.entry(name.to_string()).or_insert(0);
        if *count == u64::MAX {
            *count = 0;
        }
        *count += 1;
    }

    /// Set the named metric to zero, creating it if unseen.
    pub(crate) fn reset(&mut self, name: &str) {
        self.counts.insert(name.to_string(), 0);
    }

    /// Set every known metric to zero.
    pub(crate) fn reset_all(&mut self) {
        for count in self.counts.values_mut() {
            *count = 0;
        }
    }

    /// Current value of the named metric (zero if unseen).
    pub(crate) fn get(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Record one successful execution.
    pub(crate) fn record_success(&mut self) {
        self.increment(METRIC_EXECUTIONS);
        self.increment(METRIC_SUCCESSES);
    }

    /// Record one failed execution.
    pub(crate) fn record_failure(&mut self) {
        self.increment(METRIC_EXECUTIONS);
        self.increment(METRIC_FAILURES);
    }

    /// Copy of all current metric values.
    pub(crate) fn counts(&self) -> HashMap<String, u64> {
        self.counts.clone()
    }
}

/// Immutable point-in-time view of the breaker's metrics.
///
/// Returned by [`StatsHandle::snapshot`](crate::StatsHandle::snapshot) so
/// callers can inspect combined health without holding a live reference
/// into mutable state.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Whether the breaker was open (strictly blocking) at snapshot time.
    pub open: bool,
    /// All metric values at snapshot time.
    pub counts: HashMap<String, u64>,
}

impl StatsSnapshot {
    /// Value of the named metric at snapshot time (zero if unseen).
    pub fn get(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Total recorded executions.
    pub fn executions(&self) -> u64 {
        self.get(METRIC_EXECUTIONS)
    }

    /// Total recorded successes.
    pub fn successes(&self) -> u64 {
        self.get(METRIC_SUCCESSES)
    }

    /// Total recorded failures.
    pub fn failures(&self) -> u64 {
        self.get(METRIC_FAILURES)
    }
}
