//! Marshalling errors.

use marshal_define::SpecError;
use thiserror::Error;

/// Errors produced while building or rendering an input.
///
/// `InvalidArgument` and `MissingRequiredField` are the caller-fixable
/// kinds: the first is raised eagerly when a value cannot be coerced to
/// its declared type, the second lazily by `render`. `Definition` and
/// `Encoding` point at a broken operation table rather than at the
/// caller's input.
#[derive(Debug, Error)]
pub enum MarshalError {
    /// A provided value does not fit the declared field type.
    #[error("Invalid value for \"{field}\" of \"{shape}\": {reason}")]
    InvalidArgument {
        /// Shape owning the field.
        shape: String,
        /// Field name.
        field: String,
        /// What is wrong with the value.
        reason: String,
    },

    /// A required field has no value at render time.
    #[error("Missing parameter \"{field}\" for \"{operation}\". The value cannot be null.")]
    MissingRequiredField {
        /// Qualified operation name.
        operation: String,
        /// Field path, e.g. `GroupName` or `AccessControlPolicy.Grants[1].Grantee.Type`.
        field: String,
    },

    /// The operation table itself is malformed.
    #[error(transparent)]
    Definition(#[from] SpecError),

    /// The body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl MarshalError {
    /// Creates an invalid argument error.
    pub fn invalid(
        shape: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            shape: shape.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Marshalling errors are validation failures; retrying cannot fix them.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Name of the offending field, when the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { field, .. } | Self::MissingRequiredField { field, .. } => {
                Some(field)
            }
            Self::Definition(_) | Self::Encoding(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message() {
        let err = MarshalError::MissingRequiredField {
            operation: "CognitoIdentityProvider.CreateGroup".to_string(),
            field: "GroupName".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing parameter \"GroupName\" for \"CognitoIdentityProvider.CreateGroup\". The value cannot be null."
        );
        assert_eq!(err.field(), Some("GroupName"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn invalid_argument_message() {
        let err = MarshalError::invalid("Grantee", "Type", "expected string, found number");
        assert_eq!(
            err.to_string(),
            "Invalid value for \"Type\" of \"Grantee\": expected string, found number"
        );
    }

    #[test]
    fn definition_errors_are_transparent() {
        let err: MarshalError = SpecError::invalid_template("x", "must start with '/'").into();
        assert_eq!(err.to_string(), "Invalid path template 'x': must start with '/'");
        assert!(err.field().is_none());
    }
}
