//! # Pass Payload
//!
//! The credential itself: which booking, when it was signed, and the digest
//! binding those two fields to the shared secret. A payload is immutable once
//! built; there are no setters.

use serde::Serialize;

use crate::identity::BookingId;
use crate::temporal::EpochMillis;

/// A signed booking pass.
///
/// Serializes with the wire field names and in the fixed order
/// `bookingId`, `issuedAt`, `signature`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    booking_id: BookingId,
    issued_at: EpochMillis,
    signature: String,
}

impl Payload {
    /// Assemble a payload. No validation happens here; signing and
    /// verification live in `bpass-crypto` and `bpass-verify`.
    pub fn new(booking_id: BookingId, issued_at: EpochMillis, signature: impl Into<String>) -> Self {
        Self {
            booking_id,
            issued_at,
            signature: signature.into(),
        }
    }

    /// The booking this pass attests to.
    pub fn booking_id(&self) -> BookingId {
        self.booking_id
    }

    /// When the pass was signed.
    pub fn issued_at(&self) -> EpochMillis {
        self.issued_at
    }

    /// The stored digest, opaque to callers.
    pub fn signature(&self) -> &str {
        &self.signature
    }
}
