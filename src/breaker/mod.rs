//! Circuit breaker state machine with lazily derived half-open state.
//!
//! The circuit breaker pattern prevents cascading failures by temporarily
//! stopping calls to a failing dependency. It has three states:
//!
//! - **Closed**: normal operation, calls allowed
//! - **Open**: too many failures, calls blocked
//! - **`HalfOpen`**: recovery window, calls allowed as probes
//!
//! ## State Transitions
//!
//! ```text
//! Closed → Open: consecutive failures reach max_failures
//! Open → HalfOpen: reset_timeout elapsed (derived, never stored)
//! HalfOpen → Closed: recorded success
//! HalfOpen → Open: recorded failure (timer restarts)
//! ```
//!
//! `HalfOpen` is not a stored state reached via a timer callback. It is
//! recomputed on every query as `open && opened_at.elapsed() >= reset_timeout`,
//! so the observable state is a pure function of wall-clock time and the
//! last recorded transition. No background timers, nothing to clean up.
//!
//! ## Usage
//!
//! ```
//! use circuit_state::{CircuitBreaker, CircuitBreakerConfig};
//! use std::time::Duration;
//!
//! let cb = CircuitBreaker::with_config(CircuitBreakerConfig {
//!     max_failures: 3,
//!     reset_timeout: Duration::from_secs(30),
//! });
//!
//! // Ask before acting
//! if cb.test().is_ok() {
//!     // Make the call, then report the outcome...
//!     cb.record_success();
//! }
//! ```

mod config;
mod error;


pub use config::CircuitBreakerConfig;
pub use error::CircuitBreakerOpenError;

use std::time::Instant;

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::stats::{Stats, StatsSnapshot};

/// Stored breaker state. `HalfOpen` is derived from `Open`, never stored.
#[derive(Debug, Clone, Copy)]
enum StoredState {
    Closed,
    Open { opened_at: Instant },
}

/// State as observed at a point in time, once elapsed time is factored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Observed {
    Closed,
    Open,
    HalfOpen,
}

/// Fields guarded by the breaker's mutex.
///
/// State transitions and counter increments for one recorded outcome must
/// land in the same critical section, so they live behind one lock.
#[derive(Debug)]
struct Inner {
    state: StoredState,
    /// Consecutive failures since the last success or open/close transition.
    failures: u32,
    stats: Stats,
}

/// Circuit breaker guarding calls to a single unreliable dependency.
///
/// Thread-safe; share via `Arc` for concurrent use. The breaker never
/// executes the protected work itself: callers ask [`test`](Self::test)
/// whether to proceed and report the outcome back via
/// [`record_success`](Self::record_success) /
/// [`record_failure`](Self::record_failure).
#[derive(Debug)]
pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    inner: Mutex<Inner>,
}

impl CircuitBreaker {
    /// Create a circuit breaker with default configuration.
    pub fn new() -> Self {
        Self::with_config(CircuitBreakerConfig::default())
    }

    /// Create a circuit breaker with custom configuration.
    ///
    /// The breaker starts closed with zeroed counters.
    pub fn with_config(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(Inner {
                state: StoredState::Closed,
                failures: 0,
                stats: Stats::new(),
            }),
        }
    }

    /// Check whether the breaker is closed (normal operation).
    pub fn is_closed(&self) -> bool {
        self.observed() == Observed::Closed
    }

    /// Check whether the breaker is open (strictly blocking calls).
    ///
    /// True only while the reset timeout has not yet elapsed; once it has,
    /// this becomes false and [`is_half_open`](Self::is_half_open) becomes
    /// true without any field changing.
    pub fn is_open(&self) -> bool {
        self.observed() == Observed::Open
    }

    /// Check whether the open window has elapsed and probes are admitted.
    pub fn is_half_open(&self) -> bool {
        self.observed() == Observed::HalfOpen
    }

    /// Ask whether the protected call may proceed.
    ///
    /// Returns [`CircuitBreakerOpenError`] while the breaker is strictly
    /// open; `Ok(())` while closed or half-open. Does not mutate counters,
    /// only [`record_success`](Self::record_success) and
    /// [`record_failure`](Self::record_failure) do.
    pub fn test(&self) -> Result<(), CircuitBreakerOpenError> {
        if self.is_open() {
            Err(CircuitBreakerOpenError)
        } else {
            Ok(())
        }
    }

    /// Record a successful call.
    ///
    /// - Closed: resets the consecutive-failure count
    /// - Half-open: closes the circuit (recovery succeeded)
    /// - Open: counters only; a well-behaved caller should not have called,
    ///   but the outcome is still recorded without forcing a transition
    pub fn record_success(&self) {
        let mut inner = self.inner.lock();
        inner.stats.record_success();

        match observe(inner.state, &self.config) {
            Observed::Closed => {
                inner.failures = 0;
            },
            Observed::HalfOpen => {
                info!("circuit breaker closing after successful probe");
                inner.state = StoredState::Closed;
                inner.failures = 0;
            },
            Observed::Open => {
                warn!("success recorded while circuit breaker is open");
            },
        }
    }

    /// Record a failed call.
    ///
    /// - Closed: increments the consecutive-failure count; reaching
    ///   `max_failures` opens the circuit
    /// - Half-open: the probe failed, so the circuit re-opens and the
    ///   reset timer restarts
    /// - Open: counters only, already blocking
    pub fn record_failure(&self) {
        let mut inner = self.inner.lock();
        inner.stats.record_failure();

        match observe(inner.state, &self.config) {
            Observed::Closed => {
                inner.failures = inner.failures.saturating_add(1);
                if inner.failures >= self.config.max_failures {
                    warn!(
                        failures = inner.failures,
                        "circuit breaker opening after consecutive failures"
                    );
                    inner.state = StoredState::Open {
                        opened_at: Instant::now(),
                    };
                    inner.failures = 0;
                }
            },
            Observed::HalfOpen => {
                warn!("probe failed, circuit breaker re-opening");
                inner.state = StoredState::Open {
                    opened_at: Instant::now(),
                };
                inner.failures = 0;
            },
            Observed::Open => {},
        }
    }

    /// Record a failure. Alias for [`record_failure`](Self::record_failure).
    pub fn fail(&self) {
        self.record_failure();
    }

    /// Record a success. Alias for [`record_success`](Self::record_success).
    pub fn succeed(&self) {
        self.record_success();
    }

    /// Current consecutive-failure count.
    ///
    /// Non-zero only while the breaker is closed; every transition into
    /// Open or Closed resets it.
    pub fn failure_count(&self) -> u32 {
        self.inner.lock().failures
    }

    /// The effective configuration.
    pub const fn config(&self) -> &CircuitBreakerConfig {
        &self.config
    }

    /// Access the breaker's counters.
    pub const fn stats(&self) -> StatsHandle<'_> {
        StatsHandle { breaker: self }
    }

    fn observed(&self) -> Observed {
        observe(self.inner.lock().state, &self.config)
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the observable state from the stored state and elapsed time.
fn observe(state: StoredState, config: &CircuitBreakerConfig) -> Observed {
    match state {
        StoredState::Closed => Observed::Closed,
        StoredState::Open { opened_at } => {
            if opened_at.elapsed() >= config.reset_timeout {
                Observed::HalfOpen
            } else {
                Observed::Open
            }
        },
    }
}

/// Handle to the breaker's counters.
///
/// Every operation takes the breaker's lock, so counter updates serialize
/// with state transitions. Obtained via
/// [`CircuitBreaker::stats`](CircuitBreaker::stats).
#[derive(Debug, Clone, Copy)]
pub struct StatsHandle<'a> {
    breaker: &'a CircuitBreaker,
}

impl StatsHandle<'_> {
    /// Add 1 to the named metric, creating it at zero if unseen.
    pub fn increment(&self, name: &str) {
        self.breaker.inner.lock().stats.increment(name);
    }

    /// Set the named metric to zero.
    pub fn reset(&self, name: &str) {
        self.breaker.inner.lock().stats.reset(name);
    }

    /// Set every known metric to zero. Breaker state is untouched.
    pub fn reset_all(&self) {
        self.breaker.inner.lock().stats.reset_all();
    }

    /// Current value of the named metric (zero if unseen).
    pub fn get(&self, name: &str) -> u64 {
        self.breaker.inner.lock().stats.get(name)
    }

    /// Immutable copy of all metric values plus the breaker's current
    /// open/blocked flag.
    pub fn snapshot(&self) -> StatsSnapshot {
        let inner = self.breaker.inner.lock();
        StatsSnapshot {
            open: observe(inner.state, &self.breaker.config) == Observed::Open,
            counts: inner.stats.counts(),
        }
    }
}
