//! # bpass-crypto — Pass Signing
//!
//! Computes the digest that binds a booking pass to the shared secret:
//!
//! - **SHA-256** over the UTF-8 canonical message, lowercase hex.
//! - **Weak rolling hash**, a 32-bit fallback for constrained deployments.
//!   Selecting it is explicit and logged; see [`DigestBackend`].
//! - **Constant-time comparison** of a stored digest against a recomputed one.
//!
//! ## Crate Policy
//!
//! - Depends only on `bpass-core` internally.
//! - Digest input is always `&CanonicalMessage`, never raw bytes.
//! - No mocking of digests in tests; known vectors are checked against
//!   `sha256sum` output.

pub mod rolling;
pub mod sha256;
pub mod signer;

pub use bpass_core::DigestBackend;
pub use rolling::rolling_hex;
pub use sha256::sha256_hex;
pub use signer::{sign, Signer};
