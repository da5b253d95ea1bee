//! # Invoke Subcommand
//!
//! Runs a hook invocation payload through the standard handler registry
//! and prints the resulting progress event as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use apiauth_hook::HookRegistry;

use crate::document::load_document;

/// Arguments for the `apiauth invoke` subcommand.
#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Hook invocation payload (JSON or YAML).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print the progress event on a single line.
    #[arg(long)]
    pub compact: bool,
}

/// Execute the invoke subcommand.
///
/// Returns exit code: 0 when the event is SUCCESS, 1 otherwise.
pub fn run_invoke(args: &InvokeArgs, registry: &HookRegistry) -> Result<u8> {
    let payload = load_document(&args.path)?;
    let event = registry.invoke_json(&payload);

    let rendered = if args.compact {
        serde_json::to_string(&event)
    } else {
        serde_json::to_string_pretty(&event)
    }
    .context("failed to serialize progress event")?;
    println!("{rendered}");

    Ok(if event.is_success() { 0 } else { 1 })
}
