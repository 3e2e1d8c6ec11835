//! # bpass-verify — Pass Verification
//!
//! Decides whether scanned pass text is genuine and current, without a
//! server round-trip:
//!
//! ```text
//! parse ──fail──▶ invalid_format
//!   │
//! temporal ──too old──▶ expired
//!   │      ──too far ahead──▶ not_yet_valid
//!   │
//! signature ──mismatch──▶ invalid_signature
//!   │
//! accept { bookingId }
//! ```
//!
//! Every path ends in an [`Outcome`]; nothing escapes as an error or panic.
//! The [`Validator`] is stateless. One-time-use semantics are layered on top
//! by [`SingleUseValidator`] over a collaborator-owned
//! [`ConsumedTokenStore`].

pub mod outcome;
pub mod single_use;
pub mod validator;

pub use outcome::{Outcome, RejectReason};
pub use single_use::{ConsumedTokenStore, InMemoryConsumedTokens, SingleUseValidator, TokenKey};
pub use validator::{validate, Validator};
