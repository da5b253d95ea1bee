//! # Target Types
//!
//! The four API Gateway resource types the hook inspects. Every `match` on
//! [`TargetType`] is exhaustive, so adding a type forces a decision about
//! which document shape it uses.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidatorError;

/// A recognized hook target resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    /// `AWS::ApiGateway::RestApi`: REST API with an inline OpenAPI body.
    #[serde(rename = "AWS::ApiGateway::RestApi")]
    RestApi,
    /// `AWS::ApiGatewayV2::Api`: HTTP API with an inline OpenAPI body.
    #[serde(rename = "AWS::ApiGatewayV2::Api")]
    HttpApi,
    /// `AWS::ApiGateway::Method`: a single REST API method.
    #[serde(rename = "AWS::ApiGateway::Method")]
    Method,
    /// `AWS::ApiGatewayV2::Route`: a single HTTP API route.
    #[serde(rename = "AWS::ApiGatewayV2::Route")]
    Route,
}

/// How a target's property document is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    /// Operations are described by an OpenAPI document under `Body.paths`.
    OpenApi,
    /// The resource itself is a single operation with an `AuthorizerId`.
    Declarative,
}

impl TargetType {
    /// Returns all recognized target types.
    pub fn all() -> &'static [TargetType] {
        &[Self::RestApi, Self::HttpApi, Self::Method, Self::Route]
    }

    /// Returns the CloudFormation type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RestApi => "AWS::ApiGateway::RestApi",
            Self::HttpApi => "AWS::ApiGatewayV2::Api",
            Self::Method => "AWS::ApiGateway::Method",
            Self::Route => "AWS::ApiGatewayV2::Route",
        }
    }

    /// Returns the document shape that applies to this target.
    pub fn shape(&self) -> DocumentShape {
        match self {
            Self::RestApi | Self::HttpApi => DocumentShape::OpenApi,
            Self::Method | Self::Route => DocumentShape::Declarative,
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = ValidatorError;

    /// Exact, case-sensitive match on the CloudFormation type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AWS::ApiGateway::RestApi" => Ok(Self::RestApi),
            "AWS::ApiGatewayV2::Api" => Ok(Self::HttpApi),
            "AWS::ApiGateway::Method" => Ok(Self::Method),
            "AWS::ApiGatewayV2::Route" => Ok(Self::Route),
            other => Err(ValidatorError::UnrecognizedTargetType(other.to_string())),
        }
    }
}
