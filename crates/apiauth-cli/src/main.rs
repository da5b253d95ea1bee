//! # apiauth CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use apiauth_cli::invoke::{run_invoke, InvokeArgs};
use apiauth_cli::template::{run_template, TemplateArgs};
use apiauth_cli::validate::{run_validate, ValidateArgs};
use apiauth_hook::HookRegistry;

/// API authorizer validator.
///
/// Checks that API Gateway resources declare an authorizer on every
/// operation, the same way the `AWS::SAM::ApiAuthValidator` hook does
/// during stack provisioning.
#[derive(Parser, Debug)]
#[command(name = "apiauth", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one resource property document against its target type.
    Validate(ValidateArgs),

    /// Run a hook invocation payload through the lifecycle handlers.
    Invoke(InvokeArgs),

    /// Check every API Gateway resource in a CloudFormation template.
    Template(TemplateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "apiauth starting");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Invoke(args) => run_invoke(&args, &HookRegistry::standard()),
        Commands::Template(args) => run_template(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
