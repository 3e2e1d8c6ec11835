//! # Identity Newtypes
//!
//! `BookingId` names the booking a pass attests to. `SharedSecret` is the key
//! material held independently by issuer and verifier.
//!
//! ## Security Invariant
//!
//! `SharedSecret` never appears in `Debug` output, is not `Serialize`, has no
//! `Default`, and is zeroized on drop. A pass must never carry its secret.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CoreError;

/// Identifier of the booking a pass attests to.
///
/// Issuance requires a positive value ([`BookingId::new`]). Parsed payloads
/// are structural and may carry zero via [`BookingId::from_raw`]; such a
/// payload can never carry a matching signature because it could not have
/// been issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(u64);

impl BookingId {
    /// Create a booking id for issuance. Rejects zero.
    pub fn new(id: u64) -> Result<Self, CoreError> {
        if id == 0 {
            return Err(CoreError::InvalidBookingId(id));
        }
        Ok(Self(id))
    }

    /// Wrap a value decoded from scanned text without the positivity check.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Access the inner integer.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The shared signing secret.
///
/// Distributed out of band to issuer and verifier; this crate neither
/// generates nor persists it.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(String);

impl SharedSecret {
    /// Wrap a secret value. Empty or whitespace-only secrets are rejected.
    pub fn new(secret: impl Into<String>) -> Result<Self, CoreError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(CoreError::MissingSecret(
                "shared secret must not be empty".to_string(),
            ));
        }
        Ok(Self(secret))
    }

    /// Load the secret from the named environment variable.
    ///
    /// Fails with [`CoreError::MissingSecret`] when the variable is unset,
    /// not valid unicode, or empty.
    pub fn from_env(var_name: &str) -> Result<Self, CoreError> {
        let value = std::env::var(var_name).map_err(|_| {
            CoreError::MissingSecret(format!("environment variable {var_name} not set"))
        })?;
        Self::new(value).map_err(|_| {
            CoreError::MissingSecret(format!("environment variable {var_name} is empty"))
        })
    }

    /// Expose the secret for canonical message construction.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_id_rejects_zero() {
        assert_eq!(BookingId::new(0), Err(CoreError::InvalidBookingId(0)));
        assert_eq!(BookingId::new(42).unwrap().get(), 42);
    }

    #[test]
    fn booking_id_from_raw_allows_zero() {
        assert_eq!(BookingId::from_raw(0).get(), 0);
    }

    #[test]
    fn booking_id_serializes_as_integer() {
        let json = serde_json::to_string(&BookingId::new(7).unwrap()).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn secret_rejects_empty() {
        assert!(SharedSecret::new("").is_err());
        assert!(SharedSecret::new("   ").is_err());
        assert!(SharedSecret::new("k").is_ok());
    }

    #[test]
    fn secret_debug_is_redacted() {
        let secret = SharedSecret::new("hunter2").unwrap();
        let debug = format!("{secret:?}");
        assert_eq!(debug, "SharedSecret(<redacted>)");
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn secret_from_unset_env_fails() {
        let err = SharedSecret::from_env("BPASS_TEST_SECRET_THAT_IS_NEVER_SET").unwrap_err();
        assert!(matches!(err, CoreError::MissingSecret(_)));
    }
}
