//! # Verify Subcommand
//!
//! Verifies pass text given on the command line, or one pass per line from
//! `--file` or stdin. Prints one JSON outcome per pass. With `--single-use`
//! a pass presented twice in the same run is rejected the second time.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context as _;
use bpass_verify::{InMemoryConsumedTokens, Outcome, SingleUseValidator, Validator};
use clap::Args;

use crate::context::Context;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Scanned pass text. Reads `--file` or stdin when omitted.
    pub text: Option<String>,

    /// File with one scanned pass per line.
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Reject passes already accepted earlier in this run.
    #[arg(long)]
    pub single_use: bool,
}

/// Verify every pass and return the outcomes in input order.
pub fn verify_all(passes: &[String], single_use: bool, ctx: &Context) -> Vec<Outcome> {
    let validator = Validator::with_system_clock(ctx.config);
    if single_use {
        let guard = SingleUseValidator::new(validator, InMemoryConsumedTokens::new());
        passes.iter().map(|p| guard.validate(p, &ctx.secret)).collect()
    } else {
        passes.iter().map(|p| validator.validate(p, &ctx.secret)).collect()
    }
}

/// Split input into passes, one per non-blank line.
pub fn split_passes(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn collect_input(args: &VerifyArgs) -> anyhow::Result<Vec<String>> {
    if let Some(text) = &args.text {
        return Ok(vec![text.clone()]);
    }
    let input = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading passes from stdin")?;
            buf
        }
    };
    Ok(split_passes(&input))
}

/// Run the subcommand. Returns whether every pass was accepted.
pub fn run(args: &VerifyArgs, ctx: &Context) -> anyhow::Result<bool> {
    let passes = collect_input(args)?;
    anyhow::ensure!(!passes.is_empty(), "no pass text supplied");

    let outcomes = verify_all(&passes, args.single_use, ctx);
    for outcome in &outcomes {
        println!("{}", serde_json::to_string(outcome)?);
    }
    Ok(outcomes.iter().all(Outcome::is_valid))
}
