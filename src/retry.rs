//! Retry policy and configuration.
//!
//! A [`RetryConfig`] is a pure decision object: given the current attempt
//! number and the kind of failure, it decides whether to retry and how long
//! to back off. It performs no I/O of its own; the waiting happens in the
//! executor.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use crate::error::TransportError;

/// Default number of retry attempts for failed requests.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay between retry attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Default cap on the computed backoff delay.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(60);

/// Classification of a failed attempt, used to decide retry eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Likely to succeed on a later attempt (timeouts, rate limits, 5xx).
    Transient,
    /// Will not succeed on retry (bad request, auth, malformed response).
    Fatal,
    /// The response arrived but was not the valid JSON the caller asked for.
    InvalidJson,
}

impl FailureKind {
    /// Classify a transport error.
    pub fn from_transport(error: &TransportError) -> Self {
        if error.is_transient() {
            FailureKind::Transient
        } else {
            FailureKind::Fatal
        }
    }
}

/// Callback invoked before each general retry: `(attempt, max_retries, error, delay)`.
pub type RetryCallback = Arc<dyn Fn(u32, u32, &TransportError, Duration) + Send + Sync>;

/// Callback invoked before each JSON-validation retry: `(attempt, max_retries, message)`.
pub type JsonRetryCallback = Arc<dyn Fn(u32, u32, &str) + Send + Sync>;

/// Configuration for retry behavior.
///
/// Immutable once constructed and cheap to clone; callbacks are shared
/// behind `Arc` so one config can be used across concurrent calls.
#[derive(Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Base delay before the first retry.
    pub delay: Duration,
    /// Whether the delay grows exponentially with each retry.
    pub exponential_backoff: bool,
    /// Growth factor applied per retry when backoff is exponential.
    pub backoff_multiplier: f64,
    /// Upper bound on any computed delay.
    pub max_delay: Option<Duration>,
    on_retry: Option<RetryCallback>,
    on_json_retry: Option<JsonRetryCallback>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
            exponential_backoff: true,
            backoff_multiplier: 2.0,
            max_delay: Some(DEFAULT_MAX_DELAY),
            on_retry: None,
            on_json_retry: None,
        }
    }
}

impl fmt::Debug for RetryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryConfig")
            .field("max_retries", &self.max_retries)
            .field("delay", &self.delay)
            .field("exponential_backoff", &self.exponential_backoff)
            .field("backoff_multiplier", &self.backoff_multiplier)
            .field("max_delay", &self.max_delay)
            .field("on_retry", &self.on_retry.is_some())
            .field("on_json_retry", &self.on_json_retry.is_some())
            .finish()
    }
}

impl RetryConfig {
    /// Create a new RetryConfig with the given retry budget.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Set the maximum number of retry attempts.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the base delay between retry attempts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Disable exponential backoff; every retry waits the base delay.
    pub fn with_linear_backoff(mut self) -> Self {
        self.exponential_backoff = false;
        self
    }

    /// Set the growth factor for exponential backoff.
    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Set (or clear) the cap on the computed delay.
    pub fn with_max_delay(mut self, max_delay: Option<Duration>) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Install a callback fired before each general retry.
    pub fn on_retry<F>(mut self, callback: F) -> Self
    where
        F: Fn(u32, u32, &TransportError, Duration) + Send + Sync + 'static,
    {
        self.on_retry = Some(Arc::new(callback));
        self
    }

    /// Install a callback fired before each JSON-validation retry.
    pub fn on_json_retry<F>(mut self, callback: F) -> Self
    where
        F: Fn(u32, u32, &str) + Send + Sync + 'static,
    {
        self.on_json_retry = Some(Arc::new(callback));
        self
    }

    /// Decide whether another attempt is allowed.
    ///
    /// `attempt` is the number of retries already spent (0 before the first
    /// retry). Fatal failures never retry; transient and invalid-JSON
    /// failures retry while budget remains.
    pub fn should_retry(&self, attempt: u32, kind: FailureKind) -> bool {
        if attempt >= self.max_retries {
            return false;
        }
        !matches!(kind, FailureKind::Fatal)
    }

    /// Compute the delay before the given retry. `attempt` is 1-indexed.
    pub fn compute_delay(&self, attempt: u32) -> Duration {
        if !self.exponential_backoff {
            return self.delay;
        }
        let factor = self.backoff_multiplier.powi(attempt.saturating_sub(1) as i32);
        let delay = self.delay.mul_f64(factor);
        match self.max_delay {
            Some(cap) => delay.min(cap),
            None => delay,
        }
    }

    /// Fire the general retry callback, if any.
    ///
    /// A panicking callback is caught and dropped so observability hooks can
    /// never abort the retry loop or mask the real outcome.
    pub(crate) fn notify_retry(&self, attempt: u32, error: &TransportError, delay: Duration) {
        if let Some(callback) = &self.on_retry {
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                callback(attempt, self.max_retries, error, delay)
            }));
            if outcome.is_err() {
                tracing::debug!(attempt, "retry callback panicked; ignoring");
            }
        }
    }

    /// Fire the JSON-validation retry callback, if any. Panics are dropped.
    pub(crate) fn notify_json_retry(&self, attempt: u32, message: &str) {
        if let Some(callback) = &self.on_json_retry {
            let outcome =
                catch_unwind(AssertUnwindSafe(|| callback(attempt, self.max_retries, message)));
            if outcome.is_err() {
                tracing::debug!(attempt, "JSON retry callback panicked; ignoring");
            }
        }
    }
}
