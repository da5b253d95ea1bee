//! # apiauth-hook — CloudFormation Hook Adapter
//!
//! Connects the hook invocation protocol to the validator in
//! `apiauth-core`. This crate provides:
//!
//! - [`protocol`]: invocation request and progress event wire types.
//! - [`handlers`]: the pre-create, pre-update, and pre-delete handlers.
//! - [`registry`]: [`HookRegistry`], an explicit table from invocation
//!   point to handler, built once at startup and passed by reference.
//!
//! ## Architecture
//!
//! ```text
//! request payload  -->  HookRegistry::invoke  -->  handler  -->  apiauth-core::AuthValidator
//!                                                     |
//!                              ProgressEvent  <-------+
//! ```
//!
//! ## Lifecycle
//!
//! | Invocation point         | Behavior                                    |
//! |--------------------------|---------------------------------------------|
//! | `CREATE_PRE_PROVISION`   | Validate target, SUCCESS or FAILED          |
//! | `UPDATE_PRE_PROVISION`   | Validate target, SUCCESS or FAILED          |
//! | `DELETE_PRE_PROVISION`   | Always SUCCESS                              |
//!
//! Unrecognized target types surface as FAILED with `InternalFailure`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod registry;

pub use config::TypeConfiguration;
pub use error::HookError;
pub use protocol::{
    HandlerErrorCode, HookInvocationRequest, HookStatus, InvocationPoint, ProgressEvent,
    TargetModel,
};
pub use registry::{HandlerFn, HandlerRequest, HookRegistry};

/// Type name under which the hook is registered.
pub const TYPE_NAME: &str = "AWS::SAM::ApiAuthValidator";
