//! # apiauth-cli — Command-Line Interface
//!
//! Provides the `apiauth` tool for running the authorizer check outside
//! the CloudFormation control plane.
//!
//! ## Subcommands
//!
//! - `apiauth validate` — Check one resource property document.
//! - `apiauth invoke` — Run a hook invocation payload through the handlers.
//! - `apiauth template` — Check every API Gateway resource in a template.
//!
//! ```bash
//! apiauth validate --target-name AWS::ApiGateway::Method method.json
//! apiauth invoke request.json
//! apiauth template template.yaml
//! ```
//!
//! Exit codes: 0 compliant, 1 non-compliant, 2 operational error.

pub mod document;
pub mod invoke;
pub mod template;
pub mod validate;
