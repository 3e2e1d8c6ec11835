//! # bpass-cli — Booking Pass Command-Line Interface
//!
//! ## Subcommands
//!
//! - `issue`: sign a pass for a booking, print its text, optionally write the PNG
//! - `verify`: verify scanned pass text, one JSON outcome per pass
//! - `sign`: compute the signature for explicit fields
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to the domain crates; no pass logic lives here.
//! - The secret always comes from the environment (`--secret-env`, default
//!   `BPASS_SECRET`) so it never shows up in shell history or `ps`.

pub mod context;
pub mod issue;
pub mod sign;
pub mod verify;

pub use context::Context;
