//! # bpass-core — Foundational Types for Booking Passes
//!
//! A booking pass is a tamper-evident, time-bound credential proving that a
//! booking is genuine and current. This crate defines the types every other
//! `bpass-*` crate builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for domain primitives.** `BookingId`, `EpochMillis` and
//!    `SharedSecret` are distinct types. No bare integers or strings cross
//!    crate boundaries.
//!
//! 2. **`CanonicalMessage` newtype.** The digest input is built by exactly one
//!    constructor from a fixed format string. The signer accepts nothing else,
//!    so field order and whitespace can never drift between issuer and
//!    verifier.
//!
//! 3. **No default secret.** `SharedSecret` refuses empty input and has no
//!    `Default` impl. Missing secrets fail fast.
//!
//! 4. **Injected time.** Everything that needs "now" takes a [`Clock`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `bpass-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod config;
pub mod digest;
pub mod error;
pub mod identity;
pub mod payload;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalMessage;
pub use config::PassConfig;
pub use digest::DigestBackend;
pub use error::CoreError;
pub use identity::{BookingId, SharedSecret};
pub use payload::Payload;
pub use temporal::{Clock, EpochMillis, FixedClock, SystemClock};
