//! Definition-time errors for operation tables.

use thiserror::Error;

/// A structural problem in an operation table.
///
/// These are programmer errors in the Schema Registry, caught by
/// [`OperationSpec::validate`](crate::OperationSpec::validate) before any
/// request is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// The path template does not parse.
    #[error("Invalid path template '{template}': {message}")]
    InvalidPathTemplate {
        /// The offending template.
        template: String,
        /// What is wrong with it.
        message: String,
    },

    /// A placeholder in the path has no matching path field.
    #[error("Operation '{operation}' has placeholder '{{{placeholder}}}' without a path field")]
    UnboundPlaceholder {
        /// Qualified operation name.
        operation: String,
        /// Placeholder name.
        placeholder: String,
    },

    /// A path field has no placeholder in the template.
    #[error("Operation '{operation}' declares path field '{field}' missing from its template")]
    UnusedPathField {
        /// Qualified operation name.
        operation: String,
        /// Field name.
        field: String,
    },

    /// A path field is optional, so the path could not always be built.
    #[error("Operation '{operation}' declares optional path field '{field}'")]
    OptionalPathField {
        /// Qualified operation name.
        operation: String,
        /// Field name.
        field: String,
    },

    /// Two fields of a shape render under the same key.
    #[error("Shape '{shape}' renders '{wire_name}' more than once")]
    DuplicateWireName {
        /// Shape name.
        shape: String,
        /// The colliding key.
        wire_name: String,
    },

    /// A body field was declared on an operation that sends no body.
    #[error("Operation '{operation}' has body field '{field}' but no body encoding")]
    BodyWithoutEncoding {
        /// Qualified operation name.
        operation: String,
        /// Field name.
        field: String,
    },

    /// A body encoding was declared on a method that sends no body.
    #[error("Operation '{operation}' declares a body but is sent with {method}")]
    BodyOnBodilessMethod {
        /// Qualified operation name.
        operation: String,
        /// The method, e.g. `GET`.
        method: String,
    },

    /// A path, query or header field has a type that cannot be rendered as text.
    #[error("Field '{field}' of '{operation}' has type {ty}, which cannot be placed in the {location}")]
    NonScalarField {
        /// Qualified operation name.
        operation: String,
        /// Field name.
        field: String,
        /// Declared type.
        ty: String,
        /// `path`, `query` or `header`.
        location: &'static str,
    },

    /// A nested shape declares a field outside the body.
    #[error("Nested shape '{shape}' places field '{field}' outside the body")]
    NestedLocation {
        /// Shape name.
        shape: String,
        /// Field name.
        field: String,
    },
}

impl SpecError {
    /// Creates an invalid path template error.
    pub fn invalid_template(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPathTemplate {
            template: template.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_message_keeps_braces() {
        let err = SpecError::UnboundPlaceholder {
            operation: "S3.GetObject".to_string(),
            placeholder: "Key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Operation 'S3.GetObject' has placeholder '{Key}' without a path field"
        );
    }

    #[test]
    fn invalid_template_display() {
        let err = SpecError::invalid_template("/{a", "unclosed '{'");
        assert_eq!(err.to_string(), "Invalid path template '/{a': unclosed '{'");
    }
}
