//! # Handler Registry
//!
//! Maps each [`InvocationPoint`] to a handler function. The registry is
//! built once at process start and shared by reference; it holds no
//! mutable state, so concurrent invocations need no locking.
//!
//! [`HookRegistry::invoke`] never fails: every error becomes a FAILED
//! [`ProgressEvent`] with an error code, which is what the control plane
//! expects back.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::TypeConfiguration;
use crate::error::HookError;
use crate::handlers::{pre_create_handler, pre_delete_handler, pre_update_handler};
use crate::protocol::{
    CallbackContext, HandlerErrorCode, HookInvocationRequest, InvocationPoint, ProgressEvent,
    TargetModel,
};

/// The view of an invocation a handler works with.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerRequest {
    /// CloudFormation type name of the target.
    pub target_name: String,
    /// Logical ID of the target, when supplied.
    pub target_logical_id: Option<String>,
    /// Proposed and previous resource properties.
    pub target_model: TargetModel,
    /// Idempotency token of the invocation.
    pub client_request_token: Option<String>,
}

impl From<&HookInvocationRequest> for HandlerRequest {
    fn from(req: &HookInvocationRequest) -> Self {
        Self {
            target_name: req.request_data.target_name.clone(),
            target_logical_id: req.request_data.target_logical_id.clone(),
            target_model: req.request_data.target_model.clone(),
            client_request_token: req.client_request_token.clone(),
        }
    }
}

/// Signature shared by all lifecycle handlers.
pub type HandlerFn =
    fn(&HandlerRequest, &mut CallbackContext, &TypeConfiguration) -> Result<ProgressEvent, HookError>;

/// Table of lifecycle handlers for one hook type.
#[derive(Clone)]
pub struct HookRegistry {
    type_name: String,
    handlers: HashMap<InvocationPoint, HandlerFn>,
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("type_name", &self.type_name)
            .field("points", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl HookRegistry {
    /// Create an empty registry for `type_name`.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            handlers: HashMap::new(),
        }
    }

    /// The authorizer validator hook with all three handlers registered.
    pub fn standard() -> Self {
        Self::new(crate::TYPE_NAME)
            .register(InvocationPoint::CreatePreProvision, pre_create_handler)
            .register(InvocationPoint::UpdatePreProvision, pre_update_handler)
            .register(InvocationPoint::DeletePreProvision, pre_delete_handler)
    }

    /// Register `handler` for `point`, replacing any previous handler.
    pub fn register(mut self, point: InvocationPoint, handler: HandlerFn) -> Self {
        self.handlers.insert(point, handler);
        self
    }

    /// Hook type name this registry serves.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns true if a handler is registered for `point`.
    pub fn handles(&self, point: InvocationPoint) -> bool {
        self.handlers.contains_key(&point)
    }

    /// Dispatch a typed invocation request to its handler.
    pub fn invoke(&self, request: &HookInvocationRequest) -> ProgressEvent {
        let token = request.client_request_token.clone();
        let point = request.action_invocation_point;
        let span = tracing::info_span!(
            "hook_invocation",
            hook = %self.type_name,
            point = %point,
            target_name = %request.request_data.target_name,
            logical_id = request.request_data.target_logical_id.as_deref().unwrap_or("-"),
        );
        let _entered = span.enter();

        let type_configuration = match TypeConfiguration::from_hook_model(request.hook_model.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid type configuration");
                return ProgressEvent::failed_with_code(
                    HandlerErrorCode::InvalidTypeConfiguration,
                    format!("invalid type configuration: {e}"),
                )
                .with_client_request_token(token);
            }
        };

        let mut callback_context = request
            .request_context
            .as_ref()
            .and_then(|ctx| ctx.callback_context.clone())
            .unwrap_or_default();

        let result = match self.handlers.get(&point) {
            Some(handler) => handler(
                &HandlerRequest::from(request),
                &mut callback_context,
                &type_configuration,
            ),
            None => Err(HookError::MissingHandler(point)),
        };

        let event = match result {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(error = %e, "hook handler failed");
                ProgressEvent::failed_with_code(e.error_code(), e.to_string())
            }
        };
        tracing::info!(status = ?event.hook_status, "hook invocation complete");
        event.with_client_request_token(token)
    }

    /// Decode a raw payload and dispatch it. Undecodable payloads become
    /// FAILED events with [`HandlerErrorCode::InvalidRequest`].
    pub fn invoke_json(&self, payload: &Value) -> ProgressEvent {
        match serde_json::from_value::<HookInvocationRequest>(payload.clone()) {
            Ok(request) => self.invoke(&request),
            Err(e) => {
                let err = HookError::InvalidRequest(e.to_string());
                tracing::warn!(error = %err, "rejecting malformed hook payload");
                let token = payload
                    .get("clientRequestToken")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                ProgressEvent::failed_with_code(err.error_code(), err.to_string())
                    .with_client_request_token(token)
            }
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
