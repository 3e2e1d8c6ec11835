//! # Pass Signer
//!
//! `Signer` binds `(bookingId, issuedAt)` to the shared secret through the
//! configured [`DigestBackend`]. It holds no state beyond the backend choice
//! and is freely shareable across threads.
//!
//! ## Security Invariant
//!
//! - The digest input is the [`CanonicalMessage`]; no other field of a
//!   payload can influence the signature.
//! - [`Signer::verify`] compares full digests in constant time. A stored
//!   digest of a different length never matches.
//! - Constructing a signer on the weak backend logs a warning on the
//!   `bpass::security` target every time, so degraded posture is visible to
//!   operators.

use bpass_core::{BookingId, CanonicalMessage, DigestBackend, EpochMillis, SharedSecret};
use subtle::ConstantTimeEq;

use crate::rolling::rolling_hex;
use crate::sha256::sha256_hex;

/// Computes and checks pass signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signer {
    backend: DigestBackend,
}

impl Signer {
    /// Create a signer on the given backend.
    pub fn new(backend: DigestBackend) -> Self {
        if backend.is_security_weak() {
            tracing::warn!(
                target: "bpass::security",
                backend = %backend,
                "pass signer is using a non-cryptographic digest; passes can be forged"
            );
        }
        Self { backend }
    }

    /// Create a SHA-256 signer.
    pub fn sha256() -> Self {
        Self {
            backend: DigestBackend::Sha256,
        }
    }

    /// The backend this signer uses.
    pub fn backend(&self) -> DigestBackend {
        self.backend
    }

    /// Whether signatures from this signer are forgeable offline.
    pub fn is_security_weak(&self) -> bool {
        self.backend.is_security_weak()
    }

    /// Digest an already-built canonical message.
    pub fn digest(&self, message: &CanonicalMessage) -> String {
        match self.backend {
            DigestBackend::Sha256 => sha256_hex(message),
            DigestBackend::WeakRolling => rolling_hex(message),
        }
    }

    /// Sign a booking at an issuance instant.
    pub fn sign(&self, booking_id: BookingId, issued_at: EpochMillis, secret: &SharedSecret) -> String {
        self.digest(&CanonicalMessage::new(booking_id, issued_at, secret))
    }

    /// Recompute the signature and compare it against `signature`.
    pub fn verify(
        &self,
        booking_id: BookingId,
        issued_at: EpochMillis,
        secret: &SharedSecret,
        signature: &str,
    ) -> bool {
        let expected = self.sign(booking_id, issued_at, secret);
        digests_match(&expected, signature)
    }
}

impl Default for Signer {
    fn default() -> Self {
        Self::sha256()
    }
}

/// Sign with SHA-256.
pub fn sign(booking_id: BookingId, issued_at: EpochMillis, secret: &SharedSecret) -> String {
    Signer::sha256().sign(booking_id, issued_at, secret)
}

fn digests_match(expected: &str, presented: &str) -> bool {
    expected.as_bytes().ct_eq(presented.as_bytes()).into()
}
