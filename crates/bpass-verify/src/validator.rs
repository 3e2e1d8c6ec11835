//! # Pass Validator
//!
//! Linear, single-pass state machine: parse, temporal check, signature check,
//! accept. Each rejection is terminal.
//!
//! ## Temporal Rules
//!
//! With `age = now - issuedAt`:
//!
//! - `age > validityWindow` is `expired`. An age exactly equal to the window
//!   is still accepted.
//! - `-age > clockSkewTolerance` (issued too far in the future) is
//!   `not_yet_valid`.
//!
//! The temporal check runs before the signature check, so an expired pass is
//! reported as `expired` even when it was also tampered with.

use std::sync::Arc;
use std::time::Duration;

use bpass_codec::parse;
use bpass_core::{Clock, EpochMillis, PassConfig, Payload, SharedSecret, SystemClock};
use bpass_crypto::Signer;

use crate::outcome::{Outcome, RejectReason};

/// Verifies scanned pass text against a shared secret.
pub struct Validator {
    signer: Signer,
    clock: Arc<dyn Clock>,
    config: PassConfig,
}

impl Validator {
    /// Create a validator with the given policy, reading time from `clock`.
    pub fn new(config: PassConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            signer: Signer::new(config.digest_backend),
            clock,
            config,
        }
    }

    /// Create a validator on the wall clock.
    pub fn with_system_clock(config: PassConfig) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    /// The active policy.
    pub fn config(&self) -> &PassConfig {
        &self.config
    }

    /// Verify `raw` using the configured validity window.
    pub fn validate(&self, raw: &str, secret: &SharedSecret) -> Outcome {
        self.validate_with_window(raw, secret, self.config.validity_window)
    }

    /// Verify `raw` using an explicit validity window.
    pub fn validate_with_window(&self, raw: &str, secret: &SharedSecret, window: Duration) -> Outcome {
        self.check(raw, secret, window)
            .map(|payload| payload.booking_id())
            .into()
    }

    /// Run the state machine and return the accepted payload.
    pub(crate) fn check(
        &self,
        raw: &str,
        secret: &SharedSecret,
        window: Duration,
    ) -> Result<Payload, RejectReason> {
        let payload = parse(raw).map_err(|e| {
            tracing::debug!(error = %e, "rejected pass: invalid format");
            RejectReason::InvalidFormat
        })?;

        let now = self.clock.now();
        self.check_temporal(&payload, now, window)?;

        if !self.signer.verify(
            payload.booking_id(),
            payload.issued_at(),
            secret,
            payload.signature(),
        ) {
            tracing::warn!(
                target: "bpass::security",
                booking_id = %payload.booking_id(),
                issued_at = %payload.issued_at(),
                backend = %self.signer.backend(),
                "rejected pass: signature mismatch"
            );
            return Err(RejectReason::InvalidSignature);
        }

        tracing::debug!(booking_id = %payload.booking_id(), "accepted pass");
        Ok(payload)
    }

    fn check_temporal(
        &self,
        payload: &Payload,
        now: EpochMillis,
        window: Duration,
    ) -> Result<(), RejectReason> {
        let age = payload.issued_at().age_at(now);
        if age > i128::try_from(window.as_millis()).unwrap_or(i128::MAX) {
            tracing::debug!(
                booking_id = %payload.booking_id(),
                age_ms = %age,
                "rejected pass: expired"
            );
            return Err(RejectReason::Expired);
        }
        let skew = i128::try_from(self.config.clock_skew_tolerance.as_millis()).unwrap_or(i128::MAX);
        if -age > skew {
            tracing::debug!(
                booking_id = %payload.booking_id(),
                ahead_ms = %(-age),
                "rejected pass: issued in the future"
            );
            return Err(RejectReason::NotYetValid);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("signer", &self.signer)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Verify `raw` on the wall clock with SHA-256 and the default clock skew
/// tolerance.
pub fn validate(raw: &str, secret: &SharedSecret, validity_window: Duration) -> Outcome {
    Validator::with_system_clock(PassConfig::default().with_validity_window(validity_window))
        .validate(raw, secret)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use bpass_codec::to_text;
    use bpass_core::{BookingId, FixedClock};
    use proptest::prelude::*;

    proptest! {
        /// Arbitrary text always ends in an outcome, never a panic.
        #[test]
        fn arbitrary_text_yields_outcome(text in any::<String>()) {
            let v = Validator::new(PassConfig::default(), Arc::new(FixedClock::new(EpochMillis::new(0))));
            let outcome = v.validate(&text, &SharedSecret::new("k").unwrap());
            prop_assert!(!outcome.is_valid() || text.contains("signature"));
        }

        /// Flipping any signature character yields invalid_signature.
        #[test]
        fn tampered_signature_detected(booking in 1u64..1_000_000, pos in 0usize..64) {
            let key = SharedSecret::new("k").unwrap();
            let booking_id = BookingId::new(booking).unwrap();
            let issued_at = EpochMillis::new(1_000);
            let sig = Signer::sha256().sign(booking_id, issued_at, &key);
            let mut bytes = sig.into_bytes();
            bytes[pos] = if bytes[pos] == b'0' { b'1' } else { b'0' };
            let tampered = String::from_utf8(bytes).unwrap();
            let text = to_text(&Payload::new(booking_id, issued_at, tampered)).unwrap();
            let v = Validator::new(PassConfig::default(), Arc::new(FixedClock::new(issued_at)));
            prop_assert_eq!(v.validate(&text, &key).reason(), Some(RejectReason::InvalidSignature));
        }
    }
}
