//! # Type Configuration
//!
//! The configuration model the control plane sends with each invocation
//! under `hookModel`. The authorizer rule has no tunables, so the model is
//! empty; unknown properties are accepted and ignored.

use serde::{Deserialize, Serialize};

/// Hook type configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConfiguration {}

impl TypeConfiguration {
    /// Build from the request's `hookModel`, treating absence as default.
    pub fn from_hook_model(model: Option<&serde_json::Value>) -> Result<Self, serde_json::Error> {
        match model {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => serde_json::from_value(value.clone()),
        }
    }
}
