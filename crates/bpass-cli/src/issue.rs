//! # Issue Subcommand
//!
//! Signs a pass for a booking at the current time, prints its text, and
//! writes the QR image when `--out` is given.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use bpass_codec::{Encoder, PassArtifact};
use bpass_core::BookingId;
use bpass_crypto::Signer;
use clap::Args;

use crate::context::Context;

/// Arguments for the issue subcommand.
#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Booking to issue a pass for (positive integer).
    #[arg(long)]
    pub booking_id: u64,

    /// Write the PNG QR code to this path.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Issue a pass with the wall clock.
pub fn issue(args: &IssueArgs, ctx: &Context) -> anyhow::Result<PassArtifact> {
    let booking_id = BookingId::new(args.booking_id)?;
    let encoder = Encoder::with_system_clock(Signer::new(ctx.config.digest_backend));
    let artifact = encoder
        .encode(booking_id, &ctx.secret)
        .with_context(|| format!("rendering pass for booking {booking_id}"))?;
    if let Some(path) = &args.out {
        write_png(path, artifact.png())?;
    }
    Ok(artifact)
}

/// Run the subcommand, printing the pass text.
pub fn run(args: &IssueArgs, ctx: &Context) -> anyhow::Result<()> {
    let artifact = issue(args, ctx)?;
    println!("{}", artifact.text());
    Ok(())
}

fn write_png(path: &Path, png: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, png).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = png.len(), "wrote pass image");
    Ok(())
}
