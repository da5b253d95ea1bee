//! # Hook Protocol Wire Types
//!
//! JSON shapes exchanged with the CloudFormation hook control plane. Field
//! names are camelCase on the wire; enum values use the control plane's
//! SCREAMING_SNAKE_CASE or PascalCase spelling. Unknown request fields
//! (credentials, log group names, encryption keys) are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mutable per-invocation callback state. The validator never uses it,
/// but it is threaded through to keep the handler signature complete.
pub type CallbackContext = Map<String, Value>;

/// Point in the provisioning lifecycle at which the hook is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvocationPoint {
    /// Before a resource is created.
    CreatePreProvision,
    /// Before a resource is updated.
    UpdatePreProvision,
    /// Before a resource is deleted.
    DeletePreProvision,
}

impl InvocationPoint {
    /// Returns all invocation points.
    pub fn all() -> &'static [InvocationPoint] {
        &[
            Self::CreatePreProvision,
            Self::UpdatePreProvision,
            Self::DeletePreProvision,
        ]
    }

    /// Wire spelling of the invocation point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatePreProvision => "CREATE_PRE_PROVISION",
            Self::UpdatePreProvision => "UPDATE_PRE_PROVISION",
            Self::DeletePreProvision => "DELETE_PRE_PROVISION",
        }
    }
}

impl fmt::Display for InvocationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal status of a hook invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HookStatus {
    /// The operation may proceed.
    Success,
    /// The operation is blocked.
    Failed,
}

/// Error codes this hook reports to the control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    /// The request payload was malformed.
    InvalidRequest,
    /// The handler failed unexpectedly.
    InternalFailure,
    /// The hook's type configuration could not be parsed.
    InvalidTypeConfiguration,
}

/// Proposed (and, on update, previous) properties of the target resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetModel {
    /// Properties the resource will have after the operation.
    #[serde(default = "empty_object")]
    pub resource_properties: Value,
    /// Properties the resource had before an update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_resource_properties: Option<Value>,
}

impl Default for TargetModel {
    fn default() -> Self {
        Self {
            resource_properties: empty_object(),
            previous_resource_properties: None,
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Target description within an invocation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookRequestData {
    /// CloudFormation type name of the target, e.g. `AWS::ApiGateway::RestApi`.
    pub target_name: String,
    /// Kind of target; `RESOURCE` for resource hooks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    /// Logical ID of the target within its template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_logical_id: Option<String>,
    /// Target property documents.
    #[serde(default)]
    pub target_model: TargetModel,
}

/// Re-invocation bookkeeping from the control plane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// Invocation attempt number.
    #[serde(default)]
    pub invocation: u32,
    /// Callback context returned by a previous IN_PROGRESS event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_context: Option<CallbackContext>,
}

/// A hook invocation as delivered by the control plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookInvocationRequest {
    /// Idempotency token, echoed in the progress event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_set_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_type_version: Option<String>,
    /// Type configuration for the hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_model: Option<Value>,
    /// Lifecycle point being invoked.
    pub action_invocation_point: InvocationPoint,
    /// Target being provisioned.
    pub request_data: HookRequestData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,
}

/// Outcome of a hook invocation, returned to the control plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub hook_status: HookStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_context: Option<CallbackContext>,
    #[serde(default)]
    pub callback_delay_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl ProgressEvent {
    /// A SUCCESS event with no message.
    pub fn success() -> Self {
        Self {
            hook_status: HookStatus::Success,
            error_code: None,
            message: None,
            callback_context: None,
            callback_delay_seconds: 0,
            client_request_token: None,
        }
    }

    /// A FAILED event carrying `message` and no error code.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            hook_status: HookStatus::Failed,
            message: Some(message.into()),
            ..Self::success()
        }
    }

    /// A FAILED event carrying an error code.
    pub fn failed_with_code(error_code: HandlerErrorCode, message: impl Into<String>) -> Self {
        Self {
            error_code: Some(error_code),
            ..Self::failed(message)
        }
    }

    /// Attach the request's idempotency token.
    pub fn with_client_request_token(mut self, token: Option<String>) -> Self {
        self.client_request_token = token;
        self
    }

    /// Returns true if the status is SUCCESS.
    pub fn is_success(&self) -> bool {
        self.hook_status == HookStatus::Success
    }
}
