//! # Hook Errors
//!
//! Errors a handler or the registry can raise. None of them escape
//! [`crate::HookRegistry::invoke`]; each maps to a FAILED progress event
//! with a [`HandlerErrorCode`].

use apiauth_core::ValidatorError;
use thiserror::Error;

use crate::protocol::{HandlerErrorCode, InvocationPoint};

/// Error raised while handling a hook invocation.
#[derive(Error, Debug)]
pub enum HookError {
    /// The validator could not check the target.
    #[error(transparent)]
    Validator(#[from] ValidatorError),

    /// No handler is registered for the invocation point.
    #[error("no handler registered for {0}")]
    MissingHandler(InvocationPoint),

    /// The request payload could not be understood.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl HookError {
    /// Error code reported to the control plane for this error.
    pub fn error_code(&self) -> HandlerErrorCode {
        match self {
            Self::Validator(_) | Self::MissingHandler(_) => HandlerErrorCode::InternalFailure,
            Self::InvalidRequest(_) => HandlerErrorCode::InvalidRequest,
        }
    }
}
