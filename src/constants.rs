//! Centralized constants for breaker defaults and metric names.
//!
//! All magic numbers live here with documented rationale so tuning does
//! not require a code search.

// =============================================================================
// Breaker Defaults
// =============================================================================

/// Default number of consecutive failures before opening the circuit.
/// Rationale: 3 consecutive failures indicates a real problem, not transient.
pub const BREAKER_MAX_FAILURES: u32 = 3;

/// Default time the circuit stays open before a probe is allowed (10 seconds).
/// Rationale: long enough for transient issues to resolve, short enough that
/// a recovered dependency is picked up quickly.
pub const BREAKER_RESET_TIMEOUT_MILLIS: u64 = 10_000;

// =============================================================================
// Metric Names
// =============================================================================

/// Metric counting every recorded outcome.
pub const METRIC_EXECUTIONS: &str = "executions";

/// Metric counting recorded successes.
pub const METRIC_SUCCESSES: &str = "successes";

/// Metric counting recorded failures.
pub const METRIC_FAILURES: &str = "failures";
