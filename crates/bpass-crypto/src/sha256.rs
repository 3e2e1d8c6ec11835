//! # SHA-256 Digest Computation
//!
//! The function signature `sha256_hex(message: &CanonicalMessage)` makes it a
//! compile error to hash anything but the canonical message.

use bpass_core::CanonicalMessage;
use sha2::{Digest, Sha256};

/// SHA-256 of the canonical message, as 64 lowercase hex characters.
pub fn sha256_hex(message: &CanonicalMessage) -> String {
    let hash = Sha256::digest(message.as_bytes());
    hash.iter().map(|b| format!("{b:02x}")).collect()
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
    fn known_vector() {
        // printf '42-0-k' | sha256sum
        assert_eq!(
            sha256_hex(&message(42, 0, "k")),
            "bc91984a77ba03d43b93a71b324df6c098281d355a0e8a6b579e5365aa81b008"
        );
    }

    #[test]
    fn hex_format() {
        let hex = sha256_hex(&message(1, 1000, "s"));
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
