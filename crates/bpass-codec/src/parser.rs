//! # Pass Parser
//!
//! Turns raw scanned text back into a [`Payload`]. Parsing is purely
//! structural: it never checks expiry or the signature.
//!
//! Scanners and intermediate encoders sometimes stringify numbers, so
//! `bookingId` and `issuedAt` are accepted either as JSON numbers or as
//! decimal strings. A JSON number with a zero fractional part (`42.0`) is
//! accepted as long as it is exactly representable; anything negative,
//! fractional, or non-numeric is rejected.

use bpass_core::{BookingId, EpochMillis, Payload};
use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::text::{FIELDS, FIELD_BOOKING_ID, FIELD_ISSUED_AT, FIELD_SIGNATURE};

/// Largest integer a JSON float can carry without loss (2^53 - 1).
const MAX_EXACT_FLOAT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Parse scanned pass text.
pub fn parse(raw: &str) -> Result<Payload, ParseError> {
    let value: Value = serde_json::from_str(raw.trim())?;
    let Value::Object(fields) = value else {
        return Err(ParseError::NotAnObject);
    };

    if let Some(extra) = fields.keys().find(|k| !FIELDS.contains(&k.as_str())) {
        return Err(ParseError::UnexpectedField(extra.clone()));
    }

    let booking_id = integer_field(&fields, FIELD_BOOKING_ID)?;
    let issued_at = integer_field(&fields, FIELD_ISSUED_AT)?;
    let signature = signature_field(&fields)?;

    Ok(Payload::new(
        BookingId::from_raw(booking_id),
        EpochMillis::new(issued_at),
        signature,
    ))
}

fn integer_field(fields: &Map<String, Value>, name: &'static str) -> Result<u64, ParseError> {
    let value = fields.get(name).ok_or(ParseError::MissingField(name))?;
    let not_an_integer = || ParseError::NotAnInteger {
        field: name,
        found: value.to_string(),
    };
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                return Ok(v);
            }
            match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= MAX_EXACT_FLOAT_INTEGER => {
                    Ok(f as u64)
                }
                _ => Err(not_an_integer()),
            }
        }
        Value::String(s) => {
            let digits = s.trim();
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(not_an_integer());
            }
            digits.parse::<u64>().map_err(|_| not_an_integer())
        }
        _ => Err(not_an_integer()),
    }
}

fn signature_field(fields: &Map<String, Value>) -> Result<String, ParseError> {
    match fields.get(FIELD_SIGNATURE) {
        None => Err(ParseError::MissingField(FIELD_SIGNATURE)),
        Some(Value::String(s)) if s.is_empty() => Err(ParseError::EmptySignature),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ParseError::SignatureNotString(other.to_string())),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::text::to_text;
    use proptest::prelude::*;

    proptest! {
        /// Arbitrary text never panics the parser.
        #[test]
        fn arbitrary_text_never_panics(text in any::<String>()) {
            let _ = parse(&text);
        }

        /// Canonical text of any payload parses back to the same payload.
        #[test]
        fn canonical_text_parses_back(
            booking in any::<u64>(),
            at in any::<u64>(),
            sig in "[0-9a-f]{1,64}",
        ) {
            let payload = Payload::new(BookingId::from_raw(booking), EpochMillis::new(at), sig);
            let text = to_text(&payload).unwrap();
            prop_assert_eq!(parse(&text).unwrap(), payload);
        }
    }
}
