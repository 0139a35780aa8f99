//! Circuit breaker error types.
//!
//! Defines the error returned when the breaker blocks a call.

/// Error returned by [`test`](super::CircuitBreaker::test) while the
/// circuit is open.
///
/// This is informational rather than exceptional: callers are expected to
/// check for it and skip the protected call. The breaker re-admits calls
/// on its own once the reset timeout elapses, so the error carries no
/// retry metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Circuit breaker is open")]
pub struct CircuitBreakerOpenError;

impl CircuitBreakerOpenError {
    /// Stable machine-readable code for the blocked condition.
    pub const CODE: &'static str = "EPERM";

    /// The machine-readable code identifying this as a "not permitted"
    /// condition.
    pub const fn code(&self) -> &'static str {
        Self::CODE
    }
}

impl From<CircuitBreakerOpenError> for std::io::Error {
    fn from(err: CircuitBreakerOpenError) -> Self {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, err)
    }
}
