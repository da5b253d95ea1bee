//! # Error Types
//!
//! A negative verdict is not an error. The only exceptional condition in
//! the validator is a target type name it does not know how to check.

use thiserror::Error;

/// Error raised by the authorizer validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// The target type name matches none of the recognized API Gateway types.
    #[error("unrecognized target type: {0}")]
    UnrecognizedTargetType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_type_name() {
        let err = ValidatorError::UnrecognizedTargetType("AWS::Foo::Bar".into());
        assert_eq!(err.to_string(), "unrecognized target type: AWS::Foo::Bar");
    }
}
