// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Verifier Configuration
//!
//! Controls how `Threads` spaces are built. The worker count may come from
//! code or from the `LIMITS_VERIFY_WORKERS` environment variable; without
//! one, verification shares rayon's global pool.

/// Environment variable holding the dedicated worker count.
pub const WORKERS_ENV: &str = "LIMITS_VERIFY_WORKERS";

const DEFAULT_THREAD_NAME_PREFIX: &str = "limits-verify";

/// Configuration for building execution spaces.
///
/// # Examples
///
/// ```rust
/// # use limits_verify::config::VerifierConfig;
/// let config = VerifierConfig::default().with_workers(8);
/// assert_eq!(config.workers(), Some(8));
/// assert_eq!(config.thread_name_prefix(), "limits-verify");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    workers: Option<usize>,
    thread_name_prefix: String,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            workers: None,
            thread_name_prefix: DEFAULT_THREAD_NAME_PREFIX.to_owned(),
        }
    }
}

impl VerifierConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// A missing, zero or malformed worker count leaves the global pool in
    /// use; malformed values are logged.
    pub fn from_lookup<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(WORKERS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(0) => {}
                Ok(workers) => config.workers = Some(workers),
                Err(err) => {
                    tracing::warn!(
                        variable = WORKERS_ENV,
                        value = %raw,
                        error = %err,
                        "ignoring malformed worker count"
                    );
                }
            }
        }
        config
    }

    /// Sets a dedicated worker count. Zero selects the global pool.
    #[inline]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = (workers > 0).then_some(workers);
        self
    }

    /// Sets the prefix for dedicated worker thread names.
    #[inline]
    pub fn with_thread_name_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.thread_name_prefix = prefix.into();
        self
    }

    #[inline]
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    #[inline]
    pub fn thread_name_prefix(&self) -> &str {
        &self.thread_name_prefix
    }
}

impl std::fmt::Display for VerifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.workers {
            Some(workers) => write!(
                f,
                "VerifierConfig(workers: {}, thread_name_prefix: {})",
                workers, self.thread_name_prefix
            ),
            None => write!(
                f,
                "VerifierConfig(workers: global, thread_name_prefix: {})",
                self.thread_name_prefix
            ),
        }
    }
}
