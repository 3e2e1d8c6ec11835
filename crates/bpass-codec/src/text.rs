//! # Canonical Pass Text
//!
//! The serialized form is compact JSON with the fields in the order
//! `bookingId`, `issuedAt`, `signature` and nothing else. Field order comes
//! from the `Payload` struct definition, not from a map, so it cannot vary.

use bpass_core::Payload;

/// Wire name of the booking id field.
pub const FIELD_BOOKING_ID: &str = "bookingId";
/// Wire name of the issuance time field.
pub const FIELD_ISSUED_AT: &str = "issuedAt";
/// Wire name of the signature field.
pub const FIELD_SIGNATURE: &str = "signature";

/// All fields of the wire format, in serialization order.
pub const FIELDS: [&str; 3] = [FIELD_BOOKING_ID, FIELD_ISSUED_AT, FIELD_SIGNATURE];

/// Serialize a payload to its canonical text.
pub fn to_text(payload: &Payload) -> Result<String, serde_json::Error> {
    serde_json::to_string(payload)
}
