//! # Authorizer Validation
//!
//! Decides whether a proposed API Gateway resource declares an authorizer
//! for every operation it exposes.
//!
//! ## OpenAPI Shape
//!
//! `Body.paths` maps each path to a path item, and each path item maps an
//! HTTP method to an operation. Every operation must carry a non-empty
//! `security` list. Path item entries that are not mappings (`parameters`,
//! `summary`, `servers`, `$ref`) are not operations and are skipped. A
//! document without `paths` has nothing to check and passes.
//!
//! ## Declarative Shape
//!
//! The resource is a single operation; it passes iff `AuthorizerId` is
//! present and truthy.

use std::fmt;

use serde_json::Value;

use crate::document::{field, is_truthy, mapping, sequence_or_empty};
use crate::error::ValidatorError;
use crate::target::{DocumentShape, TargetType};

/// Message reported to the control plane when a resource is rejected.
pub const MISSING_AUTHORIZER_MESSAGE: &str = "Not all paths and methods contain authorizer.";

/// The first operation found without a security requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path key under `Body.paths`, e.g. `/pets/{id}`.
    pub path: String,
    /// Method key within the path item, e.g. `get`.
    pub method: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method.to_uppercase(), self.path)
    }
}

/// Outcome of checking one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every operation declares an authorizer.
    Approved,
    /// At least one operation lacks an authorizer. Carries the offending
    /// operation when the OpenAPI shape located one.
    Denied(Option<Violation>),
}

impl Verdict {
    /// Returns true for [`Verdict::Approved`].
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Validate `properties` for the resource type named `target_name`.
///
/// Returns `Ok(true)` when the authorizer requirement is satisfied and
/// `Ok(false)` when a violation is found.
///
/// # Errors
///
/// [`ValidatorError::UnrecognizedTargetType`] if `target_name` is not one
/// of the four recognized API Gateway types.
pub fn validate(target_name: &str, properties: &Value) -> Result<bool, ValidatorError> {
    AuthValidator
        .check(target_name, properties)
        .map(|verdict| verdict.is_approved())
}

/// OpenAPI-shape check. Fails fast on the first operation without security.
pub fn validate_open_api_auth(properties: &Value) -> bool {
    find_open_api_violation(properties).is_none()
}

/// Locate the first operation under `Body.paths` with an absent or empty
/// `security` list.
pub fn find_open_api_violation(properties: &Value) -> Option<Violation> {
    let paths = field(properties, "Body")
        .and_then(|body| field(body, "paths"))
        .and_then(mapping)?;

    for (path, path_item) in paths {
        let Some(methods) = mapping(path_item) else {
            continue;
        };
        for (method, definition) in methods {
            if !definition.is_object() {
                continue;
            }
            if sequence_or_empty(field(definition, "security")).is_empty() {
                return Some(Violation {
                    path: path.clone(),
                    method: method.clone(),
                });
            }
        }
    }
    None
}

/// Declarative-shape check on `AuthorizerId`.
pub fn validate_declarative_auth(properties: &Value) -> bool {
    field(properties, "AuthorizerId").is_some_and(is_truthy)
}

/// Stateless entry point that dispatches on [`TargetType`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthValidator;

impl AuthValidator {
    /// Parse `target_name` and check `properties` against its rule.
    pub fn check(&self, target_name: &str, properties: &Value) -> Result<Verdict, ValidatorError> {
        let target: TargetType = target_name.parse()?;
        Ok(self.check_target(target, properties))
    }

    /// Check `properties` against the rule for an already-parsed target.
    pub fn check_target(&self, target: TargetType, properties: &Value) -> Verdict {
        let verdict = match target.shape() {
            DocumentShape::OpenApi => match find_open_api_violation(properties) {
                None => Verdict::Approved,
                Some(violation) => Verdict::Denied(Some(violation)),
            },
            DocumentShape::Declarative => {
                if validate_declarative_auth(properties) {
                    Verdict::Approved
                } else {
                    Verdict::Denied(None)
                }
            }
        };

        match &verdict {
            Verdict::Approved => tracing::debug!(%target, "authorizer requirement satisfied"),
            Verdict::Denied(Some(violation)) => {
                tracing::debug!(%target, operation = %violation, "operation without authorizer")
            }
            Verdict::Denied(None) => tracing::debug!(%target, "AuthorizerId missing or empty"),
        }
        verdict
    }
}
