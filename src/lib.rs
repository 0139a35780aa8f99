// =============================================================================
// Lint Configuration
// =============================================================================

// Safety: no unsafe code in this crate
#![deny(unsafe_code)]
// Correctness: must handle all fallible operations
#![deny(unused_must_use)]
// Quality: pedantic but pragmatic
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
// Allowed with documented reasons
#![allow(clippy::missing_errors_doc)] // Error returns self-documenting via type
#![allow(clippy::module_name_repetitions)] // e.g., breaker::CircuitBreakerConfig is clearer
#![allow(clippy::must_use_candidate)] // Not all returned values need annotation

//! In-process circuit breaker with execution-outcome counters.
//!
//! A fault-isolation primitive: wrap calls to an unreliable dependency and
//! stop issuing them after repeated failures, giving the dependency time to
//! recover before probing it again. The breaker never executes the
//! protected work itself; it answers "may I proceed?" and records the
//! outcome the caller reports back.
//!
//! # Example
//!
//! ```
//! use circuit_state::CircuitBreaker;
//!
//! let cb = CircuitBreaker::new();
//!
//! match cb.test() {
//!     Ok(()) => {
//!         // Make the call, then report the outcome.
//!         cb.record_success();
//!     },
//!     Err(err) => {
//!         // Breaker is open: skip the call and fail fast.
//!         assert_eq!(err.to_string(), "Circuit breaker is open");
//!     },
//! }
//!
//! let stats = cb.stats().snapshot();
//! assert_eq!(stats.executions(), 1);
//! ```
//!
//! # Design
//!
//! The half-open state is derived, not stored: once the reset timeout has
//! elapsed since the circuit opened, queries report half-open and calls are
//! admitted as probes. No background timers fire transitions; observable
//! state is a pure function of wall-clock time and the last recorded
//! transition, which keeps the breaker correct across process suspension
//! and trivially testable.
//!
//! Multiple concurrent probes are permitted during the half-open window.
//! There is no single-probe gating; the first recorded outcome decides
//! whether the circuit closes or re-opens.

mod breaker;
mod stats;

/// Centralized defaults and metric names.
pub mod constants;

pub use breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitBreakerOpenError, StatsHandle};
pub use stats::StatsSnapshot;
