//! # Canonical Message: Digest Input Construction
//!
//! This module defines `CanonicalMessage`, the sole construction path for
//! bytes fed into a pass digest.
//!
//! ## Security Invariant
//!
//! The inner string is private. The only constructor joins `bookingId`,
//! `issuedAt` and the secret with [`DELIMITER`], in that order. Because the
//! digest functions in `bpass-crypto` accept only `&CanonicalMessage`, no code
//! path can hash a payload whose fields were reordered, re-encoded, or padded
//! with whitespace.
//!
//! Both numeric fields are rendered in plain decimal and cannot contain the
//! delimiter, so the boundary between the numbers and the secret is
//! unambiguous even when the secret itself contains `-`.
//!
//! The message embeds the secret. It is redacted from `Debug` and zeroized on
//! drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::identity::{BookingId, SharedSecret};
use crate::temporal::EpochMillis;

/// Separator between the canonical message fields.
pub const DELIMITER: char = '-';

/// The exact string a pass digest is computed over.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CanonicalMessage(String);

impl CanonicalMessage {
    /// Build `"{booking_id}-{issued_at}-{secret}"`.
    pub fn new(booking_id: BookingId, issued_at: EpochMillis, secret: &SharedSecret) -> Self {
        Self(format!(
            "{}{DELIMITER}{}{DELIMITER}{}",
            booking_id.get(),
            issued_at.as_millis(),
            secret.expose()
        ))
    }

    /// UTF-8 bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The message as text, for digests defined over characters.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for CanonicalMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CanonicalMessage(<redacted>)")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Distinct (booking, time) pairs never share a canonical message.
        #[test]
        fn distinct_fields_distinct_messages(
            a in 1u64..u64::MAX, b in 1u64..u64::MAX,
            ta in any::<u64>(), tb in any::<u64>(),
        ) {
            prop_assume!((a, ta) != (b, tb));
            let s = SharedSecret::new("s").unwrap();
            let ma = CanonicalMessage::new(BookingId::from_raw(a), EpochMillis::new(ta), &s);
            let mb = CanonicalMessage::new(BookingId::from_raw(b), EpochMillis::new(tb), &s);
            prop_assert_ne!(ma.as_str(), mb.as_str());
        }
    }
}
