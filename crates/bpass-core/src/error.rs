//! # Error Types
//!
//! Errors raised while constructing core types or loading configuration.
//! Verification failures are not errors at this level; they are outcomes
//! produced by `bpass-verify`.

use thiserror::Error;

/// Top-level error type for `bpass-core`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// No shared secret was supplied, or it was empty.
    #[error("shared secret missing: {0}")]
    MissingSecret(String),

    /// Booking identifiers must be positive.
    #[error("invalid booking id {0}: booking ids must be positive")]
    InvalidBookingId(u64),

    /// A configuration value could not be interpreted.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_secret_display() {
        let err = CoreError::MissingSecret("BPASS_SECRET not set".to_string());
        assert!(format!("{err}").contains("BPASS_SECRET"));
    }

    #[test]
    fn invalid_booking_id_display() {
        let msg = CoreError::InvalidBookingId(0).to_string();
        assert!(msg.contains("positive"));
        assert!(msg.contains('0'));
    }
}
