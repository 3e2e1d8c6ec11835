//! # Pass Configuration
//!
//! Verification policy knobs, loaded from the environment so container
//! deployments can inject them alongside the secret:
//!
//! ```bash
//! export BPASS_VALIDITY_WINDOW_MS=86400000
//! export BPASS_CLOCK_SKEW_MS=300000
//! export BPASS_DIGEST_BACKEND=sha256
//! ```
//!
//! The secret is deliberately not part of `PassConfig`; see
//! [`SharedSecret::from_env`](crate::SharedSecret::from_env).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::digest::DigestBackend;
use crate::error::CoreError;

/// Environment variable holding the validity window in milliseconds.
pub const ENV_VALIDITY_WINDOW_MS: &str = "BPASS_VALIDITY_WINDOW_MS";
/// Environment variable holding the clock skew tolerance in milliseconds.
pub const ENV_CLOCK_SKEW_MS: &str = "BPASS_CLOCK_SKEW_MS";
/// Environment variable selecting the digest backend.
pub const ENV_DIGEST_BACKEND: &str = "BPASS_DIGEST_BACKEND";

/// A pass is accepted for 24 hours after issuance.
pub const DEFAULT_VALIDITY_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);
/// Passes issued up to 5 minutes "in the future" are tolerated.
pub const DEFAULT_CLOCK_SKEW_TOLERANCE: Duration = Duration::from_secs(5 * 60);

/// Issuance and verification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassConfig {
    /// Maximum age at which a pass is still accepted.
    pub validity_window: Duration,
    /// How far beyond "now" an issuance time may lie.
    pub clock_skew_tolerance: Duration,
    /// Digest function for signing and verification.
    pub digest_backend: DigestBackend,
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            validity_window: DEFAULT_VALIDITY_WINDOW,
            clock_skew_tolerance: DEFAULT_CLOCK_SKEW_TOLERANCE,
            digest_backend: DigestBackend::default(),
        }
    }
}

impl PassConfig {
    /// Load configuration from process environment variables, falling back
    /// to defaults for unset variables.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_VALIDITY_WINDOW_MS) {
            config.validity_window = parse_millis(ENV_VALIDITY_WINDOW_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_CLOCK_SKEW_MS) {
            config.clock_skew_tolerance = parse_millis(ENV_CLOCK_SKEW_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_DIGEST_BACKEND) {
            config.digest_backend = raw.parse()?;
        }
        if config.validity_window.is_zero() {
            return Err(CoreError::Config(format!(
                "{ENV_VALIDITY_WINDOW_MS} must be greater than zero"
            )));
        }
        Ok(config)
    }

    /// Override the validity window.
    pub fn with_validity_window(mut self, window: Duration) -> Self {
        self.validity_window = window;
        self
    }

    /// Override the clock skew tolerance.
    pub fn with_clock_skew_tolerance(mut self, tolerance: Duration) -> Self {
        self.clock_skew_tolerance = tolerance;
        self
    }

    /// Override the digest backend.
    pub fn with_digest_backend(mut self, backend: DigestBackend) -> Self {
        self.digest_backend = backend;
        self
    }
}

fn parse_millis(name: &str, raw: &str) -> Result<Duration, CoreError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| CoreError::Config(format!("{name} must be an integer millisecond count, got {raw:?}: {e}")))
}
