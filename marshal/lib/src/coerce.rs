//! Type coercion of field values.
//!
//! Every value is converted into a fresh [`Value`] before it is stored, so
//! a failure anywhere inside a nested mapping leaves the receiving input
//! untouched.

use marshal_define::{FieldDescriptor, FieldType, Location, Shape};
use serde_json::Value as JsonValue;

use crate::error::MarshalError;
use crate::input::Input;
use crate::value::Value;

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Coerces raw JSON into a value of the field's declared type.
///
/// `null` means absent and yields `Ok(None)`.
pub(crate) fn from_json(
    shape: &Shape,
    field: &FieldDescriptor,
    json: &JsonValue,
) -> Result<Option<Value>, MarshalError> {
    if json.is_null() {
        return Ok(None);
    }

    let value = match field.ty {
        FieldType::List(element) => {
            let items = json.as_array().ok_or_else(|| {
                MarshalError::invalid(
                    shape.name,
                    field.name,
                    format!("expected {}, found {}", field.ty.type_name(), json_kind(json)),
                )
            })?;
            let mut values = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                if item.is_null() {
                    return Err(MarshalError::invalid(
                        shape.name,
                        field.name,
                        format!("list element {idx} is null"),
                    ));
                }
                values.push(scalar_or_object(shape, field, element.into(), item)?);
            }
            Value::List(values)
        }
        ty => scalar_or_object(shape, field, ty, json)?,
    };
    header_safe(shape, field, &value)?;
    Ok(Some(value))
}

fn scalar_or_object(
    shape: &Shape,
    field: &FieldDescriptor,
    ty: FieldType,
    json: &JsonValue,
) -> Result<Value, MarshalError> {
    match (ty, json) {
        (FieldType::String, JsonValue::String(s)) => Ok(Value::String(s.clone())),
        (FieldType::Integer, JsonValue::Number(n)) => {
            n.as_i64().map(Value::Integer).ok_or_else(|| {
                MarshalError::invalid(shape.name, field.name, format!("{n} is not a 64-bit integer"))
            })
        }
        (FieldType::Boolean, JsonValue::Bool(b)) => Ok(Value::Boolean(*b)),
        (FieldType::Object(nested), JsonValue::Object(_)) => {
            Input::from_json(nested, json).map(Value::Object)
        }
        _ => Err(MarshalError::invalid(
            shape.name,
            field.name,
            format!("expected {}, found {}", ty.type_name(), json_kind(json)),
        )),
    }
}

/// Checks that an already-typed value matches the field's declared type.
pub(crate) fn check(
    shape: &Shape,
    field: &FieldDescriptor,
    value: Value,
) -> Result<Value, MarshalError> {
    let value = check_type(shape, field, value)?;
    header_safe(shape, field, &value)?;
    Ok(value)
}

/// Rejects header values containing control characters other than
/// horizontal tab.
fn header_safe(shape: &Shape, field: &FieldDescriptor, value: &Value) -> Result<(), MarshalError> {
    if !matches!(field.location, Location::Header(_)) {
        return Ok(());
    }
    let Some(text) = value.to_text() else {
        return Ok(());
    };
    match text.char_indices().find(|(_, c)| c.is_ascii_control() && *c != '\t') {
        Some((idx, c)) => Err(MarshalError::invalid(
            shape.name,
            field.name,
            format!("header value contains control character {c:?} at byte {idx}"),
        )),
        None => Ok(()),
    }
}

fn check_type(shape: &Shape, field: &FieldDescriptor, value: Value) -> Result<Value, MarshalError> {
    match field.ty {
        FieldType::List(element) => match value {
            Value::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if !matches_type(element.into(), item) {
                        return Err(MarshalError::invalid(
                            shape.name,
                            field.name,
                            format!(
                                "list element {idx}: expected {}, found {}",
                                element.type_name(),
                                describe(item)
                            ),
                        ));
                    }
                }
                Ok(Value::List(items))
            }
            other => Err(mismatch(shape, field, &other)),
        },
        ty if matches_type(ty, &value) => Ok(value),
        _ => Err(mismatch(shape, field, &value)),
    }
}

fn matches_type(ty: FieldType, value: &Value) -> bool {
    match (ty, value) {
        (FieldType::String, Value::String(_))
        | (FieldType::Integer, Value::Integer(_))
        | (FieldType::Boolean, Value::Boolean(_)) => true,
        (FieldType::Object(shape), Value::Object(input)) => input.shape() == shape,
        _ => false,
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Object(input) => input.shape().name.to_string(),
        other => other.kind().to_string(),
    }
}

fn mismatch(shape: &Shape, field: &FieldDescriptor, value: &Value) -> MarshalError {
    MarshalError::invalid(
        shape.name,
        field.name,
        format!("expected {}, found {}", field.ty.type_name(), describe(value)),
    )
}
