//! # Command Context
//!
//! Loads the pieces every subcommand needs: the policy from `BPASS_*`
//! variables and the shared secret from the chosen variable.

use anyhow::Context as _;
use bpass_core::{PassConfig, SharedSecret};

/// Default environment variable holding the shared secret.
pub const DEFAULT_SECRET_ENV: &str = "BPASS_SECRET";

/// Loaded configuration and secret.
#[derive(Debug)]
pub struct Context {
    /// Issuance and verification policy.
    pub config: PassConfig,
    /// The shared signing secret.
    pub secret: SharedSecret,
}

impl Context {
    /// Load from the process environment, failing fast if the secret is
    /// missing.
    pub fn from_env(secret_env: &str) -> anyhow::Result<Self> {
        let config = PassConfig::from_env().context("loading pass configuration")?;
        let secret = SharedSecret::from_env(secret_env)
            .with_context(|| format!("loading shared secret from {secret_env}"))?;
        if config.digest_backend.is_security_weak() {
            tracing::warn!(
                target: "bpass::security",
                backend = %config.digest_backend,
                "weak digest backend configured"
            );
        }
        Ok(Self { config, secret })
    }
}
