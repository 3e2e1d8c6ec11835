//! # Codec Error Types
//!
//! `ParseError` covers every way scanned text can be malformed; the verifier
//! collapses all of them into the `invalid_format` outcome. `RenderError`
//! covers every way an image artifact can fail to be produced, and keeps the
//! underlying cause as its `source()`.

use thiserror::Error;

/// Scanned text is not a structurally valid pass.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The text is not well-formed JSON.
    #[error("pass text is not well-formed JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The text is JSON but not an object.
    #[error("pass text must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("pass is missing required field {0:?}")]
    MissingField(&'static str),

    /// A field outside the wire format is present.
    #[error("pass contains unexpected field {0:?}")]
    UnexpectedField(String),

    /// A numeric field is not a non-negative integer.
    #[error("pass field {field:?} must be a non-negative integer, got {found}")]
    NotAnInteger {
        /// Wire name of the offending field.
        field: &'static str,
        /// The JSON value found, rendered as text.
        found: String,
    },

    /// The signature field is not a string.
    #[error("pass field \"signature\" must be a string, got {0}")]
    SignatureNotString(String),

    /// The signature field is an empty string.
    #[error("pass signature is empty")]
    EmptySignature,
}

/// The image artifact could not be produced.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The payload could not be serialized to text.
    #[error("pass serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The QR encoder rejected the data (too long for any symbol version,
    /// or unsupported characters).
    #[error("QR symbol encoding failed: {0}")]
    Symbol(#[from] qrcode::types::QrError),

    /// The raster image could not be encoded.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing_field_names_field() {
        let msg = ParseError::MissingField("signature").to_string();
        assert!(msg.contains("signature"));
    }

    #[test]
    fn not_an_integer_display() {
        let err = ParseError::NotAnInteger {
            field: "issuedAt",
            found: "-1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("issuedAt"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn render_error_keeps_source() {
        let err = RenderError::from(qrcode::types::QrError::DataTooLong);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("QR symbol"));
    }
}
