use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::mx::DEFAULT_TIMEOUT;

/// Default number of domains validated concurrently by batch checks.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Knobs for [`EmailChecker`](crate::EmailChecker).
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Upper bound on a single MX lookup.
    pub timeout_ms: u64,
    /// Domains validated concurrently per wave in batch checks.
    pub concurrency: usize,
    /// Accept disposable domains.
    pub skip_blacklist: bool,
    /// Stop after the format and blacklist checks; no DNS query is sent.
    pub skip_dns: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            concurrency: DEFAULT_CONCURRENCY,
            skip_blacklist: false,
            skip_dns: false,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn skip_blacklist(mut self, value: bool) -> Self {
        self.skip_blacklist = value;
        self
    }

    pub fn skip_dns(mut self, value: bool) -> Self {
        self.skip_dns = value;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Wave size; zero is treated as one.
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}
