//! # bpass-codec — Pass Wire Format
//!
//! Converts between [`Payload`](bpass_core::Payload) and the two external
//! forms of a pass:
//!
//! - **Text**: `{"bookingId":42,"issuedAt":0,"signature":"…"}`, fixed field
//!   order, no whitespace. This is what a scanner hands back.
//! - **Image**: a PNG QR code of that text, rendered at the highest error
//!   correction level with a fixed quiet zone and a high-contrast color pair.
//!
//! ## Modules
//!
//! - [`text`]: canonical serialization.
//! - [`parser`]: structural decoding of scanned text; no semantic checks.
//! - [`render`]: QR symbol and PNG production.
//! - [`encoder`]: issuance: clock → signer → text → image.

pub mod encoder;
pub mod error;
pub mod parser;
pub mod render;
pub mod text;

pub use encoder::{Encoder, PassArtifact};
pub use error::{ParseError, RenderError};
pub use parser::parse;
pub use render::QrRenderer;
pub use text::to_text;
