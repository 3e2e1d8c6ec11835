//! # Sign Subcommand
//!
//! Computes the signature for explicit pass fields. Useful for checking
//! another issuer's output against this one.

use bpass_core::{BookingId, EpochMillis};
use bpass_crypto::Signer;
use clap::Args;

use crate::context::Context;

/// Arguments for the sign subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// Booking id field.
    #[arg(long)]
    pub booking_id: u64,

    /// Issuance time field, epoch milliseconds.
    #[arg(long)]
    pub issued_at: u64,
}

/// Compute the signature.
pub fn signature(args: &SignArgs, ctx: &Context) -> anyhow::Result<String> {
    let booking_id = BookingId::new(args.booking_id)?;
    let signer = Signer::new(ctx.config.digest_backend);
    Ok(signer.sign(booking_id, EpochMillis::new(args.issued_at), &ctx.secret))
}

/// Run the subcommand, printing the signature.
pub fn run(args: &SignArgs, ctx: &Context) -> anyhow::Result<()> {
    println!("{}", signature(args, ctx)?);
    Ok(())
}
