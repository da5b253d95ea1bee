//! # Hook Invocation Route
//!
//! `POST /v1/hooks/invoke` accepts a control-plane invocation payload and
//! answers with the progress event. The protocol expects a progress event
//! for every call, so even malformed bodies get a 200 with a FAILED event.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use apiauth_hook::{HandlerErrorCode, ProgressEvent};

use crate::state::AppState;

/// Build the hook router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/hooks/invoke", post(invoke_hook))
}

/// POST /v1/hooks/invoke: Dispatch a hook invocation.
async fn invoke_hook(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Json<ProgressEvent> {
    let event = match body {
        Ok(Json(payload)) => state.registry.invoke_json(&payload),
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "undecodable hook payload");
            ProgressEvent::failed_with_code(HandlerErrorCode::InvalidRequest, rejection.body_text())
        }
    };
    Json(event)
}
