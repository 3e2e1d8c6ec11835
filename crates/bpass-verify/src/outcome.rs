//! # Verification Outcomes
//!
//! The wire shape consumed by UI collaborators is
//! `{"valid":true,"bookingId":42}` or `{"valid":false,"reason":"expired"}`.

use bpass_core::BookingId;
use serde::{Deserialize, Serialize, Serializer};

/// Why a pass was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The scanned text did not parse.
    InvalidFormat,
    /// The pass is older than the validity window.
    Expired,
    /// The pass claims an issuance time beyond the clock skew tolerance.
    NotYetValid,
    /// The recomputed digest did not match: tampering or wrong secret.
    InvalidSignature,
    /// The pass was already accepted once by a single-use validator.
    AlreadyUsed,
}

impl RejectReason {
    /// Returns the wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::Expired => "expired",
            Self::NotYetValid => "not_yet_valid",
            Self::InvalidSignature => "invalid_signature",
            Self::AlreadyUsed => "already_used",
        }
    }

    /// Whether this rejection should be logged and alerted on as a security
    /// event rather than a data error.
    pub fn is_security_event(&self) -> bool {
        matches!(self, Self::InvalidSignature | Self::AlreadyUsed)
    }

    /// Whether presenting the same text again could succeed. Always false:
    /// every rejection needs a fresh scan or a fresh issuance.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of verifying a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The pass is genuine and current.
    Valid {
        /// The verified booking.
        booking_id: BookingId,
    },
    /// The pass was rejected.
    Invalid {
        /// Why.
        reason: RejectReason,
    },
}

impl Outcome {
    /// Whether the pass was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The verified booking, if accepted.
    pub fn booking_id(&self) -> Option<BookingId> {
        match self {
            Self::Valid { booking_id } => Some(*booking_id),
            Self::Invalid { .. } => None,
        }
    }

    /// The rejection reason, if rejected.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { reason } => Some(*reason),
        }
    }
}

impl From<Result<BookingId, RejectReason>> for Outcome {
    fn from(result: Result<BookingId, RejectReason>) -> Self {
        match result {
            Ok(booking_id) => Self::Valid { booking_id },
            Err(reason) => Self::Invalid { reason },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeWire {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    booking_id: Option<BookingId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<RejectReason>,
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeWire {
            valid: self.is_valid(),
            booking_id: self.booking_id(),
            reason: self.reason(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_wire_shape() {
        let outcome = Outcome::Valid {
            booking_id: BookingId::new(42).unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"valid":true,"bookingId":42}"#
        );
    }

    #[test]
    fn invalid_wire_shape() {
        let outcome = Outcome::Invalid {
            reason: RejectReason::Expired,
        };
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"valid":false,"reason":"expired"}"#
        );
    }

    #[test]
    fn reason_codes_match_serde() {
        for reason in [
            RejectReason::InvalidFormat,
            RejectReason::Expired,
            RejectReason::NotYetValid,
            RejectReason::InvalidSignature,
            RejectReason::AlreadyUsed,
        ] {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.as_str()));
            assert!(!reason.is_retryable());
        }
    }

    #[test]
    fn only_signature_and_replay_are_security_events() {
        assert!(RejectReason::InvalidSignature.is_security_event());
        assert!(RejectReason::AlreadyUsed.is_security_event());
        assert!(!RejectReason::InvalidFormat.is_security_event());
        assert!(!RejectReason::Expired.is_security_event());
        assert!(!RejectReason::NotYetValid.is_security_event());
    }

    #[test]
    fn accessors() {
        let ok: Outcome = Ok(BookingId::new(1).unwrap()).into();
        assert!(ok.is_valid());
        assert_eq!(ok.booking_id().map(|b| b.get()), Some(1));
        assert_eq!(ok.reason(), None);

        let bad: Outcome = Err(RejectReason::InvalidFormat).into();
        assert!(!bad.is_valid());
        assert_eq!(bad.booking_id(), None);
        assert_eq!(bad.reason(), Some(RejectReason::InvalidFormat));
    }
}
