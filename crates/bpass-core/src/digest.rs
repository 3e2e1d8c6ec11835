//! # Digest Backends
//!
//! Names the digest function a signer uses. SHA-256 is the only backend with
//! a security guarantee. The rolling hash exists for constrained deployments
//! that must stay functional without one, and it is flagged as weak wherever
//! it is selected.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The digest function used to sign and verify passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestBackend {
    /// SHA-256, lowercase hex (64 chars).
    #[default]
    Sha256,
    /// 32-bit multiply-add rolling hash, lowercase hex. Not collision
    /// resistant and brute-forceable.
    WeakRolling,
}

impl DigestBackend {
    /// Returns the backend identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::WeakRolling => "weak-rolling",
        }
    }

    /// Whether passes signed with this backend can be forged offline.
    pub fn is_security_weak(&self) -> bool {
        matches!(self, Self::WeakRolling)
    }
}

impl std::fmt::Display for DigestBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestBackend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "weak-rolling" | "weak_rolling" => Ok(Self::WeakRolling),
            other => Err(CoreError::Config(format!(
                "unknown digest backend {other:?} (expected \"sha256\" or \"weak-rolling\")"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sha256() {
        assert_eq!(DigestBackend::default(), DigestBackend::Sha256);
        assert!(!DigestBackend::Sha256.is_security_weak());
        assert!(DigestBackend::WeakRolling.is_security_weak());
    }

    #[test]
    fn parse_round_trips_display() {
        for backend in [DigestBackend::Sha256, DigestBackend::WeakRolling] {
            assert_eq!(backend.to_string().parse::<DigestBackend>().unwrap(), backend);
        }
        assert_eq!(" SHA-256 ".parse::<DigestBackend>().unwrap(), DigestBackend::Sha256);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "md5".parse::<DigestBackend>(),
            Err(CoreError::Config(_))
        ));
    }
}
