//! # Direct Validation Route
//!
//! `POST /v1/validate` runs the authorizer check on a single resource and
//! returns the verdict without the hook envelope.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use apiauth_core::{AuthValidator, Verdict, MISSING_AUTHORIZER_MESSAGE};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Validation request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    /// CloudFormation type name of the resource.
    pub target_name: String,
    /// Proposed resource properties.
    #[serde(default)]
    pub resource_properties: Value,
}

/// Validation response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub target_name: String,
    pub compliant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Offending operation, e.g. `GET /pets`, when one was located.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

/// Build the validation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/validate", post(validate_resource))
}

/// POST /v1/validate: Check one resource for an authorizer.
async fn validate_resource(
    body: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, AppError> {
    let req = extract_json(body)?;
    let verdict = AuthValidator.check(&req.target_name, &req.resource_properties)?;

    let response = match verdict {
        Verdict::Approved => ValidateResponse {
            target_name: req.target_name,
            compliant: true,
            message: None,
            operation: None,
        },
        Verdict::Denied(violation) => ValidateResponse {
            target_name: req.target_name,
            compliant: false,
            message: Some(MISSING_AUTHORIZER_MESSAGE.to_string()),
            operation: violation.map(|v| v.to_string()),
        },
    };
    Ok(Json(response))
}
