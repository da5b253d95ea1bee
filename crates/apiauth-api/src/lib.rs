//! # apiauth-api — HTTP Service for the Authorizer Validator Hook
//!
//! Serves the hook over HTTP for local and containerised invocation.
//!
//! ## API Surface
//!
//! | Route                    | Module              | Purpose                          |
//! |--------------------------|---------------------|----------------------------------|
//! | `POST /v1/hooks/invoke`  | [`routes::hooks`]   | Hook invocation → progress event |
//! | `POST /v1/validate`      | [`routes::validate`]| Direct verdict for one resource  |
//! | `GET /health/liveness`   | (this module)       | Liveness probe                   |
//! | `GET /health/readiness`  | (this module)       | Readiness probe                  |
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers; they delegate to `apiauth-hook`
//!   and `apiauth-core`.
//! - Errors on the validation route map to structured bodies via
//!   [`AppError`]. The hook route always answers with a progress event.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::{AppConfig, AppState, LogFormat};

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Assemble the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::hooks::router())
        .merge(routes::validate::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
