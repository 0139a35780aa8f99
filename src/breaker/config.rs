//! Circuit breaker configuration.
//!
//! Defines the failure threshold and recovery timeout for the breaker.

use crate::constants;
use std::time::Duration;

/// Circuit breaker configuration.
#[derive(Debug, Clone)]
pub struct CircuitBreakerConfig {
    /// Number of consecutive failures before opening the circuit.
    pub max_failures: u32,
    /// How long the circuit stays open before a probe is allowed.
    pub reset_timeout: Duration,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            max_failures: constants::BREAKER_MAX_FAILURES,
            reset_timeout: Duration::from_millis(constants::BREAKER_RESET_TIMEOUT_MILLIS),
        }
    }
}

impl CircuitBreakerConfig {
    /// Create a new configuration.
    ///
    /// `max_failures` is clamped to at least 1; a threshold of 1 opens the
    /// circuit on the very first failure. A `reset_timeout` of zero makes
    /// the breaker eligible for half-open immediately after opening.
    pub fn new(max_failures: u32, reset_timeout: Duration) -> Self {
        Self {
            max_failures: max_failures.max(1),
            reset_timeout,
        }
    }
}
