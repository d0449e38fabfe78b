//! Operation specs: the per-call rendering policy.

use serde::Serialize;

use crate::error::SpecError;
use crate::field::{FieldType, Location, Shape};
use crate::method::RestMethod;
use crate::template::placeholders;

/// How body-located fields are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyEncoding {
    /// No body is sent; the rendered body is empty.
    None,
    /// Body fields form a JSON object. An operation with no body fields
    /// set still sends `{}`.
    Json,
}

/// Declarative description of one remote operation.
///
/// Specs are `static` tables built once and shared by every call.
///
/// ## Examples
///
/// ```
/// use marshal_define::{BodyEncoding, FieldDescriptor, OperationSpec, RestMethod, Shape};
///
/// static INPUT_FIELDS: [FieldDescriptor; 2] = [
///     FieldDescriptor::string("taskToken").required(),
///     FieldDescriptor::string("cause"),
/// ];
/// static INPUT: Shape = Shape::new("SendTaskFailureInput", &INPUT_FIELDS);
///
/// static SEND_TASK_FAILURE: OperationSpec = OperationSpec {
///     service: "StepFunctions",
///     name: "SendTaskFailure",
///     description: "Reports that a task failed",
///     method: RestMethod::Post,
///     path: "/",
///     headers: &[
///         ("Content-Type", "application/x-amz-json-1.0"),
///         ("X-Amz-Target", "AWSStepFunctions.SendTaskFailure"),
///     ],
///     query: &[],
///     encoding: BodyEncoding::Json,
///     input: &INPUT,
/// };
///
/// assert!(SEND_TASK_FAILURE.validate().is_ok());
/// assert_eq!(SEND_TASK_FAILURE.qualified_name(), "StepFunctions.SendTaskFailure");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationSpec {
    /// Service the operation belongs to.
    pub service: &'static str,
    /// Operation name, unique within its service.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// HTTP method.
    pub method: RestMethod,
    /// Path template, see [`crate::template`].
    pub path: &'static str,
    /// Headers sent with every call. These win over header fields.
    pub headers: &'static [(&'static str, &'static str)],
    /// Query pairs sent with every call, before any query fields.
    pub query: &'static [(&'static str, &'static str)],
    /// Body encoding for body-located fields.
    pub encoding: BodyEncoding,
    /// Input shape.
    pub input: &'static Shape,
}

impl OperationSpec {
    /// Returns `Service.Operation`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.service, self.name)
    }

    /// Looks up a fixed header, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }

    /// Checks the table for structural mistakes.
    ///
    /// Performs the following checks:
    ///
    /// 1. The path template parses and every placeholder is bound to a
    ///    required, scalar path field, and every path field has a placeholder.
    /// 2. Query fields are scalars or lists of scalars; header fields are
    ///    scalars.
    /// 3. Body fields only appear when the operation has a body encoding,
    ///    and a body encoding only on a method that carries a body.
    /// 4. No two fields of a shape render under the same key (header names
    ///    compared ignoring ASCII case).
    /// 5. Fields of nested shapes, recursively, stay in the body.
    ///
    /// ## Errors
    ///
    /// Returns the first [`SpecError`] found.
    pub fn validate(&self) -> Result<(), SpecError> {
        let operation = self.qualified_name();
        if self.encoding != BodyEncoding::None && !self.method.has_body() {
            return Err(SpecError::BodyOnBodilessMethod {
                operation,
                method: self.method.to_string(),
            });
        }
        let template_params = placeholders(self.path)?;

        for placeholder in &template_params {
            let bound = self
                .input
                .field(placeholder)
                .is_some_and(|field| field.location == Location::Path);
            if !bound {
                return Err(SpecError::UnboundPlaceholder {
                    operation,
                    placeholder: (*placeholder).to_string(),
                });
            }
        }

        for field in self.input.fields {
            let location = match field.location {
                Location::Body => {
                    if self.encoding == BodyEncoding::None {
                        return Err(SpecError::BodyWithoutEncoding {
                            operation,
                            field: field.name.to_string(),
                        });
                    }
                    continue;
                }
                Location::Path => {
                    if !template_params.contains(&field.name) {
                        return Err(SpecError::UnusedPathField {
                            operation,
                            field: field.name.to_string(),
                        });
                    }
                    if !field.required {
                        return Err(SpecError::OptionalPathField {
                            operation,
                            field: field.name.to_string(),
                        });
                    }
                    "path"
                }
                Location::Query(_) => "query",
                Location::Header(_) => "header",
            };

            let renderable = match field.location {
                Location::Query(_) => field.ty.is_scalar() || field.ty.is_scalar_list(),
                _ => field.ty.is_scalar(),
            };
            if !renderable {
                return Err(SpecError::NonScalarField {
                    operation,
                    field: field.name.to_string(),
                    ty: field.ty.type_name(),
                    location,
                });
            }
        }

        check_wire_names(self.input)?;

        let mut visited = vec![self.input.name];
        for field in self.input.fields {
            if let Some(nested) = nested_shape(&field.ty) {
                check_nested(nested, &mut visited)?;
            }
        }

        Ok(())
    }
}

fn nested_shape(ty: &FieldType) -> Option<&'static Shape> {
    match ty {
        FieldType::Object(shape) => Some(*shape),
        FieldType::List(element) => match FieldType::from(*element) {
            FieldType::Object(shape) => Some(shape),
            _ => None,
        },
        _ => None,
    }
}

fn check_wire_names(shape: &Shape) -> Result<(), SpecError> {
    let mut seen: Vec<(bool, String)> = Vec::with_capacity(shape.fields.len());
    for field in shape.fields {
        let key = match field.location {
            Location::Header(name) => (true, name.to_ascii_lowercase()),
            Location::Query(key) => (false, format!("?{key}")),
            Location::Body | Location::Path => (false, field.name.to_string()),
        };
        if seen.contains(&key) {
            return Err(SpecError::DuplicateWireName {
                shape: shape.name.to_string(),
                wire_name: field.wire_name().to_string(),
            });
        }
        seen.push(key);
    }
    Ok(())
}

fn check_nested(shape: &'static Shape, visited: &mut Vec<&'static str>) -> Result<(), SpecError> {
    if visited.contains(&shape.name) {
        return Ok(());
    }
    visited.push(shape.name);

    for field in shape.fields {
        if field.location != Location::Body {
            return Err(SpecError::NestedLocation {
                shape: shape.name.to_string(),
                field: field.name.to_string(),
            });
        }
    }
    check_wire_names(shape)?;

    for field in shape.fields {
        if let Some(nested) = nested_shape(&field.ty) {
            check_nested(nested, visited)?;
        }
    }
    Ok(())
}
