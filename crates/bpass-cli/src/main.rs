//! # bpass CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use bpass_cli::context::DEFAULT_SECRET_ENV;
use bpass_cli::Context;
use clap::Parser;

/// Booking pass toolchain.
///
/// Issues signed, time-bound booking passes as QR codes and verifies scanned
/// passes offline.
#[derive(Parser, Debug)]
#[command(name = "bpass", version, about)]
struct Cli {
    /// Environment variable holding the shared secret.
    #[arg(long, global = true, default_value = DEFAULT_SECRET_ENV)]
    secret_env: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Issue a signed pass for a booking.
    Issue(bpass_cli::issue::IssueArgs),
    /// Verify scanned pass text.
    Verify(bpass_cli::verify::VerifyArgs),
    /// Compute the signature for explicit pass fields.
    Sign(bpass_cli::sign::SignArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = Context::from_env(&cli.secret_env)?;

    match cli.command {
        Commands::Issue(args) => bpass_cli::issue::run(&args, &ctx)?,
        Commands::Sign(args) => bpass_cli::sign::run(&args, &ctx)?,
        Commands::Verify(args) => {
            if !bpass_cli::verify::run(&args, &ctx)? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
