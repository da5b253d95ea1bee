//! # Lifecycle Handlers
//!
//! One handler per invocation point. Create and update both run the
//! type-aware check from `apiauth-core`; delete is never blocked.

use apiauth_core::{AuthValidator, Verdict, MISSING_AUTHORIZER_MESSAGE};

use crate::config::TypeConfiguration;
use crate::error::HookError;
use crate::protocol::{CallbackContext, ProgressEvent};
use crate::registry::HandlerRequest;

/// `CREATE_PRE_PROVISION`: validate the proposed resource.
pub fn pre_create_handler(
    request: &HandlerRequest,
    _callback_context: &mut CallbackContext,
    _type_configuration: &TypeConfiguration,
) -> Result<ProgressEvent, HookError> {
    check_target(request)
}

/// `UPDATE_PRE_PROVISION`: validate the proposed resource. The previous
/// properties are not consulted.
pub fn pre_update_handler(
    request: &HandlerRequest,
    _callback_context: &mut CallbackContext,
    _type_configuration: &TypeConfiguration,
) -> Result<ProgressEvent, HookError> {
    check_target(request)
}

/// `DELETE_PRE_PROVISION`: deletions are always allowed.
pub fn pre_delete_handler(
    _request: &HandlerRequest,
    _callback_context: &mut CallbackContext,
    _type_configuration: &TypeConfiguration,
) -> Result<ProgressEvent, HookError> {
    Ok(ProgressEvent::success())
}

fn check_target(request: &HandlerRequest) -> Result<ProgressEvent, HookError> {
    let verdict = AuthValidator.check(
        &request.target_name,
        &request.target_model.resource_properties,
    )?;

    match verdict {
        Verdict::Approved => Ok(ProgressEvent::success()),
        Verdict::Denied(violation) => {
            tracing::info!(
                target_name = %request.target_name,
                logical_id = request.target_logical_id.as_deref().unwrap_or("-"),
                operation = ?violation,
                "rejecting resource without authorizer"
            );
            Ok(ProgressEvent::failed(MISSING_AUTHORIZER_MESSAGE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{HookStatus, TargetModel};
    use apiauth_core::ValidatorError;
    use serde_json::{json, Value};

    fn request(target_name: &str, properties: Value) -> HandlerRequest {
        HandlerRequest {
            target_name: target_name.to_string(),
            target_logical_id: Some("Api".into()),
            target_model: TargetModel {
                resource_properties: properties,
                previous_resource_properties: None,
            },
            client_request_token: None,
        }
    }

    #[test]
    fn create_approves_secured_rest_api() {
        let req = request(
            "AWS::ApiGateway::RestApi",
            json!({"Body": {"paths": {"/a": {"get": {"security": [{"api_key": []}]}}}}}),
        );
        let event = pre_create_handler(&req, &mut CallbackContext::new(), &TypeConfiguration::default())
            .unwrap();
        assert_eq!(event.hook_status, HookStatus::Success);
        assert!(event.message.is_none());
    }

    #[test]
    fn create_rejects_unsecured_http_api_with_fixed_message() {
        let req = request("AWS::ApiGatewayV2::Api", json!({"Body": {"paths": {"/a": {"get": {}}}}}));
        let event = pre_create_handler(&req, &mut CallbackContext::new(), &TypeConfiguration::default())
            .unwrap();
        assert_eq!(event.hook_status, HookStatus::Failed);
        assert_eq!(
            event.message.as_deref(),
            Some("Not all paths and methods contain authorizer.")
        );
        assert!(event.error_code.is_none());
    }

    #[test]
    fn update_uses_the_same_check() {
        let ok = request("AWS::ApiGateway::Method", json!({"AuthorizerId": "auth-123"}));
        let bad = request("AWS::ApiGatewayV2::Route", json!({}));
        let config = TypeConfiguration::default();
        assert!(pre_update_handler(&ok, &mut CallbackContext::new(), &config)
            .unwrap()
            .is_success());
        assert!(!pre_update_handler(&bad, &mut CallbackContext::new(), &config)
            .unwrap()
            .is_success());
    }

    #[test]
    fn unknown_target_propagates() {
        let req = request("AWS::Foo::Bar", json!({}));
        let err = pre_create_handler(&req, &mut CallbackContext::new(), &TypeConfiguration::default())
            .unwrap_err();
        assert!(matches!(
            err,
            HookError::Validator(ValidatorError::UnrecognizedTargetType(ref name)) if name == "AWS::Foo::Bar"
        ));
    }

    #[test]
    fn delete_always_succeeds() {
        for target in ["AWS::ApiGatewayV2::Route", "AWS::Foo::Bar"] {
            let req = request(target, json!({"Body": {"paths": {"/a": {"get": {}}}}}));
            let event =
                pre_delete_handler(&req, &mut CallbackContext::new(), &TypeConfiguration::default())
                    .unwrap();
            assert_eq!(event.hook_status, HookStatus::Success);
        }
    }
}
