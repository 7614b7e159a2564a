//! Per-call options for title fetching.

use anyhow::{ensure, Result};
use std::time::Duration;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default cap on concurrent fetches in a batch.
pub const DEFAULT_MAX_CONCURRENT: usize = 8;

/// The `User-Agent` sent when none is configured.
pub fn default_user_agent() -> String {
    format!("mdlink/{}", env!("CARGO_PKG_VERSION"))
}

/// Options for one fetch or one batch. Passed explicitly; never global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFetchOptions {
    /// Overall request timeout in milliseconds (> 0).
    pub timeout_ms: u64,
    /// Value of the `User-Agent` request header.
    pub user_agent: String,
    /// Maximum fetches in flight at once during a batch (>= 1).
    pub max_concurrent: usize,
}

impl Default for TitleFetchOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: default_user_agent(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

impl TitleFetchOptions {
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    /// Request timeout; a zero value is clamped to 1ms.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(1))
    }

    /// Rejects a zero timeout, a zero concurrency cap or an empty user agent.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.timeout_ms > 0, "timeout_ms must be greater than 0");
        ensure!(self.max_concurrent > 0, "max_concurrent must be at least 1");
        ensure!(!self.user_agent.trim().is_empty(), "user_agent must not be empty");
        Ok(())
    }
}
