//! # apiauth-core — Authorizer Validation for API Gateway Resources
//!
//! The decision logic of the `AWS::SAM::ApiAuthValidator` hook. Given the
//! type name of a target resource and its proposed property document, it
//! decides whether every API operation declares an authorizer.
//!
//! ## Two Document Shapes
//!
//! - **OpenAPI shape** (`AWS::ApiGateway::RestApi`, `AWS::ApiGatewayV2::Api`):
//!   every operation under `Body.paths` must carry a non-empty `security`
//!   requirement list.
//! - **Declarative shape** (`AWS::ApiGateway::Method`, `AWS::ApiGatewayV2::Route`):
//!   `AuthorizerId` must be present and truthy.
//!
//! Any other type name is rejected with
//! [`ValidatorError::UnrecognizedTargetType`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `apiauth-*` crates (leaf of the DAG).
//! - Pure functions only: no I/O, no shared state, no mutation of input.
//! - Missing or malformed nested fields are absence, never errors.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod target;
pub mod validate;

pub use error::ValidatorError;
pub use target::{DocumentShape, TargetType};
pub use validate::{
    find_open_api_violation, validate, validate_declarative_auth, validate_open_api_auth,
    AuthValidator, Verdict, Violation, MISSING_AUTHORIZER_MESSAGE,
};
