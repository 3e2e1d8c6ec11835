//! # Pass Encoder
//!
//! Issuance path: read the clock, sign `(bookingId, issuedAt)`, serialize the
//! payload, render the QR image.

use std::sync::Arc;

use bpass_core::{BookingId, Clock, Payload, SharedSecret, SystemClock};
use bpass_crypto::Signer;

use crate::error::RenderError;
use crate::render::QrRenderer;
use crate::text::to_text;

/// An issued pass: the payload, its canonical text, and the PNG image of
/// that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassArtifact {
    payload: Payload,
    text: String,
    png: Vec<u8>,
}

impl PassArtifact {
    /// The signed payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The serialized text encoded in the image.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// PNG bytes of the QR code.
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// Consume the artifact, returning the PNG bytes.
    pub fn into_png(self) -> Vec<u8> {
        self.png
    }
}

/// Issues booking passes.
pub struct Encoder {
    signer: Signer,
    clock: Arc<dyn Clock>,
    renderer: QrRenderer,
}

impl Encoder {
    /// Create an encoder reading time from `clock`.
    pub fn new(signer: Signer, clock: Arc<dyn Clock>) -> Self {
        Self {
            signer,
            clock,
            renderer: QrRenderer::default(),
        }
    }

    /// Create an encoder on the wall clock.
    pub fn with_system_clock(signer: Signer) -> Self {
        Self::new(signer, Arc::new(SystemClock))
    }

    /// Replace the renderer.
    pub fn with_renderer(mut self, renderer: QrRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Sign a payload for `booking_id` at the current instant.
    pub fn issue(&self, booking_id: BookingId, secret: &SharedSecret) -> Payload {
        let issued_at = self.clock.now();
        let signature = self.signer.sign(booking_id, issued_at, secret);
        Payload::new(booking_id, issued_at, signature)
    }

    /// Issue a pass and render it.
    pub fn encode(&self, booking_id: BookingId, secret: &SharedSecret) -> Result<PassArtifact, RenderError> {
        let payload = self.issue(booking_id, secret);
        let text = to_text(&payload)?;
        let png = self.renderer.render_png(&text).map_err(|e| {
            tracing::warn!(booking_id = %booking_id, error = %e, "pass rendering failed");
            e
        })?;

        tracing::info!(
            booking_id = %booking_id,
            issued_at = %payload.issued_at(),
            backend = %self.signer.backend(),
            "issued booking pass"
        );

        Ok(PassArtifact { payload, text, png })
    }
}

impl std::fmt::Debug for Encoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encoder")
            .field("signer", &self.signer)
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}
