//! # Validate Subcommand
//!
//! Checks a single resource property document against the authorizer rule
//! for the given target type.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use apiauth_core::{AuthValidator, Verdict, MISSING_AUTHORIZER_MESSAGE};

use crate::document::load_document;

/// Arguments for the `apiauth validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// CloudFormation type name, e.g. AWS::ApiGateway::RestApi.
    #[arg(long, short = 't')]
    pub target_name: String,

    /// Resource properties file (JSON or YAML).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 compliant, 1 non-compliant, 2 unrecognized target type.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let properties = load_document(&args.path)?;

    let verdict = match AuthValidator.check(&args.target_name, &properties) {
        Ok(verdict) => verdict,
        Err(e) => {
            println!("ERROR: {e}");
            return Ok(2);
        }
    };

    match verdict {
        Verdict::Approved => {
            println!("PASS: {} ({})", args.path.display(), args.target_name);
            Ok(0)
        }
        Verdict::Denied(violation) => {
            match violation {
                Some(v) => println!(
                    "FAIL: {} ({}): {MISSING_AUTHORIZER_MESSAGE} First offending operation: {v}",
                    args.path.display(),
                    args.target_name
                ),
                None => println!(
                    "FAIL: {} ({}): {MISSING_AUTHORIZER_MESSAGE}",
                    args.path.display(),
                    args.target_name
                ),
            }
            Ok(1)
        }
    }
}
