//! # Weak Rolling Hash
//!
//! A 32-bit multiply-add hash (`h = h * 31 + c`) over the UTF-16 code units of
//! the canonical message, wrapped to a signed 32-bit integer, reduced to its
//! absolute value and rendered as lowercase hex without padding.
//!
//! ## Security
//!
//! Not collision resistant; a forger can brute-force a matching digest for
//! any booking in seconds. Only reachable through
//! `DigestBackend::WeakRolling`.

use bpass_core::CanonicalMessage;

/// Rolling hash of the canonical message.
pub fn rolling_hex(message: &CanonicalMessage) -> String {
    let hash = message.as_str().encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    format!("{:x}", hash.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpass_core::{BookingId, EpochMillis, SharedSecret};

    fn message(id: u64, at: u64, secret: &str) -> CanonicalMessage {
        CanonicalMessage::new(
            BookingId::new(id).unwrap(),
            EpochMillis::new(at),
            &SharedSecret::new(secret).unwrap(),
        )
    }

    #[test]
    fn known_vectors() {
        assert_eq!(rolling_hex(&message(42, 0, "k")), "5b91c63f");
        assert_eq!(rolling_hex(&message(1, 1000, "s")), "7b15945f");
    }

    #[test]
    fn deterministic() {
        let m = message(7, 7, "seven");
        assert_eq!(rolling_hex(&m), rolling_hex(&m));
    }

    #[test]
    fn non_ascii_secret() {
        let hex = rolling_hex(&message(1, 1, "cl\u{00e9}-\u{1f511}"));
        assert!(!hex.is_empty());
        assert!(hex.len() <= 8);
    }
}
