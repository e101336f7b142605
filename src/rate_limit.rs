//! In-memory rate limiting for LLM-backed chat requests.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `VecDeque<Instant>`. Two limits:
//! - Per-case: 10 chat requests/min
//! - Global: 20 LLM API calls/min
//!
//! Both are overridable through `RATE_LIMIT_*` environment variables.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

const DEFAULT_PER_CASE_LIMIT: usize = 10;
const DEFAULT_PER_CASE_WINDOW_SECS: u64 = 60;

const DEFAULT_GLOBAL_LIMIT: usize = 20;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RateLimitConfig {
    per_case_limit: usize,
    per_case_window: Duration,
    global_limit: usize,
    global_window: Duration,
}

impl RateLimitConfig {
    fn from_env() -> Self {
        Self {
            per_case_limit: env_parse("RATE_LIMIT_PER_CASE", DEFAULT_PER_CASE_LIMIT),
            per_case_window: Duration::from_secs(env_parse(
                "RATE_LIMIT_PER_CASE_WINDOW_SECS",
                DEFAULT_PER_CASE_WINDOW_SECS,
            )),
            global_limit: env_parse("RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(env_parse("RATE_LIMIT_GLOBAL_WINDOW_SECS", DEFAULT_GLOBAL_WINDOW_SECS)),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-case rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerCaseExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

impl crate::error::ErrorCode for RateLimitError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PerCaseExceeded { .. } => "E_RATE_LIMIT_CASE",
            Self::GlobalExceeded { .. } => "E_RATE_LIMIT_GLOBAL",
        }
    }

    fn retryable(&self) -> bool {
        true
    }
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-case request timestamps.
    case_requests: HashMap<String, VecDeque<Instant>>,
    /// Global request timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RateLimitConfig::from_env())
    }

    fn with_config(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    /// Check both per-case and global limits, then record the request.
    ///
    /// # Errors
    ///
    /// Returns the first limit that would be exceeded; nothing is recorded then.
    pub fn check_and_record(&self, case_id: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(case_id, Instant::now())
    }

    fn check_and_record_at(&self, case_id: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let cfg = self.config;

        prune_window(&mut inner.global_requests, now, cfg.global_window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        inner.case_requests.retain(|_, deque| {
            prune_window(deque, now, cfg.per_case_window);
            !deque.is_empty()
        });

        let case_deque = inner
            .case_requests
            .entry(case_id.to_string())
            .or_default();
        if case_deque.len() >= cfg.per_case_limit {
            return Err(RateLimitError::PerCaseExceeded {
                limit: cfg.per_case_limit,
                window_secs: cfg.per_case_window.as_secs(),
            });
        }

        case_deque.push_back(now);
        inner.global_requests.push_back(now);
        Ok(())
    }
}

impl RateLimiter {
    /// Drop the request window of a deleted case.
    pub fn forget_case(&self, case_id: &str) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .case_requests
            .remove(case_id);
    }

    #[cfg(test)]
    pub(crate) fn tracks_case(&self, case_id: &str) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .case_requests
            .contains_key(case_id)
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
