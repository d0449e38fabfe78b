//! The generic field container.
//!
//! An [`Input`] holds values for the fields of one [`Shape`]. The same type
//! serves nested objects (a `Grantee`) and whole operation inputs, so no
//! per-operation code exists. Accessors never check required-ness; that
//! happens when an operation is rendered.
//!
//! ## Examples
//!
//! ```
//! use marshal::Input;
//! use marshal_define::{FieldDescriptor, Shape};
//! use serde_json::json;
//!
//! static GRANTEE_FIELDS: [FieldDescriptor; 2] = [
//!     FieldDescriptor::string("ID"),
//!     FieldDescriptor::string("Type").required(),
//! ];
//! static GRANTEE: Shape = Shape::new("Grantee", &GRANTEE_FIELDS);
//!
//! let built = Input::new(&GRANTEE).with("Type", "CanonicalUser")?.with("ID", "abc")?;
//! let parsed = Input::from_json(&GRANTEE, &json!({"ID": "abc", "Type": "CanonicalUser", "Extra": 1}))?;
//! assert_eq!(built, parsed);
//! assert_eq!(serde_json::to_string(&built)?, r#"{"ID":"abc","Type":"CanonicalUser"}"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use marshal_define::{FieldDescriptor, Shape};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::coerce;
use crate::error::MarshalError;
use crate::value::Value;

/// Field values of one [`Shape`], indexed by declaration order.
#[derive(Clone, PartialEq, Eq)]
pub struct Input {
    shape: &'static Shape,
    values: Vec<Option<Value>>,
}

impl Input {
    /// Creates an input with every field absent.
    pub fn new(shape: &'static Shape) -> Self {
        Self {
            shape,
            values: vec![None; shape.fields.len()],
        }
    }

    /// Builds an input from a JSON object.
    ///
    /// Keys that are not fields of `shape` are ignored and `null` values
    /// are treated as absent. Nested objects and lists are coerced
    /// recursively through their own shapes.
    ///
    /// ## Errors
    ///
    /// Returns [`MarshalError::InvalidArgument`] if `mapping` is not an
    /// object or a value does not fit its declared type.
    pub fn from_json(shape: &'static Shape, mapping: &JsonValue) -> Result<Self, MarshalError> {
        let object = mapping.as_object().ok_or_else(|| {
            MarshalError::invalid(shape.name, "", "expected a JSON object")
        })?;

        let mut input = Self::new(shape);
        for (slot, field) in input.values.iter_mut().zip(shape.fields) {
            if let Some(json) = object.get(field.name) {
                *slot = coerce::from_json(shape, field, json)?;
            }
        }
        Ok(input)
    }

    /// The shape this input holds values for.
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let idx = self.shape.position(name)?;
        self.values[idx].as_ref()
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn get_object(&self, name: &str) -> Option<&Input> {
        self.get(name).and_then(Value::as_object)
    }

    pub fn get_list(&self, name: &str) -> Option<&[Value]> {
        self.get(name).and_then(Value::as_list)
    }

    /// Returns `true` if the field currently has a value.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns `true` if no field has a value.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Iterates over set fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &Value)> {
        self.shape
            .fields
            .iter()
            .zip(&self.values)
            .filter_map(|(field, value)| value.as_ref().map(|value| (field, value)))
    }

    /// Sets a field to a typed value.
    ///
    /// ## Errors
    ///
    /// Returns [`MarshalError::InvalidArgument`] if `name` is not a field of
    /// this shape or the value has the wrong type. The input is unchanged
    /// on error.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), MarshalError> {
        let (idx, field) = self.locate(name)?;
        let value = coerce::check(self.shape, field, value.into())?;
        self.values[idx] = Some(value);
        Ok(())
    }

    /// Sets a field from raw JSON, coercing nested mappings.
    ///
    /// `null` clears the field.
    ///
    /// ## Errors
    ///
    /// Same as [`Input::set`].
    pub fn set_json(&mut self, name: &str, json: &JsonValue) -> Result<(), MarshalError> {
        let (idx, field) = self.locate(name)?;
        let value = coerce::from_json(self.shape, field, json)?;
        self.values[idx] = value;
        Ok(())
    }

    /// Clears a field, returning its previous value.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        let idx = self.shape.position(name)?;
        self.values[idx].take()
    }

    /// Chaining form of [`Input::set`].
    ///
    /// ## Errors
    ///
    /// Same as [`Input::set`].
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self, MarshalError> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Chaining form of [`Input::set_json`].
    ///
    /// ## Errors
    ///
    /// Same as [`Input::set`].
    pub fn with_json(mut self, name: &str, json: &JsonValue) -> Result<Self, MarshalError> {
        self.set_json(name, json)?;
        Ok(self)
    }

    fn locate(&self, name: &str) -> Result<(usize, &'static FieldDescriptor), MarshalError> {
        self.shape
            .position(name)
            .map(|idx| (idx, &self.shape.fields[idx]))
            .ok_or_else(|| MarshalError::invalid(self.shape.name, name, "no such field"))
    }
}

impl Serialize for Input {
    /// Serializes set fields as a JSON object in declaration order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name, value)?;
        }
        map.end()
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.shape.name)?;
        f.debug_map()
            .entries(self.iter().map(|(field, value)| (field.name, value)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marshal_define::Element;
    use serde_json::json;

    static GRANTEE_FIELDS: [FieldDescriptor; 3] = [
        FieldDescriptor::string("DisplayName"),
        FieldDescriptor::string("ID"),
        FieldDescriptor::string("Type").required(),
    ];
    static GRANTEE: Shape = Shape::new("Grantee", &GRANTEE_FIELDS);

    static GRANT_FIELDS: [FieldDescriptor; 3] = [
        FieldDescriptor::object("Grantee", &GRANTEE),
        FieldDescriptor::string("Permission"),
        FieldDescriptor::list("Labels", Element::String),
    ];
    static GRANT: Shape = Shape::new("Grant", &GRANT_FIELDS);

    #[test]
    fn missing_keys_default_to_absent() {
        let input = Input::from_json(&GRANTEE, &json!({})).unwrap();
        assert!(input.is_empty());
        assert!(!input.is_set("Type"));
    }

    #[test]
    fn non_object_mapping_is_rejected() {
        let err = Input::from_json(&GRANTEE, &json!(["Type"])).unwrap_err();
        assert!(matches!(err, MarshalError::InvalidArgument { .. }));
    }

    #[test]
    fn accessors_never_validate_required() {
        let mut input = Input::new(&GRANTEE);
        input.set("ID", "abc").unwrap();
        assert_eq!(input.get_str("ID"), Some("abc"));
        assert!(input.get("Type").is_none());
        assert_eq!(input.unset("ID"), Some(Value::from("abc")));
        assert!(input.is_empty());
    }

    #[test]
    fn unknown_field_on_set_is_rejected() {
        let mut input = Input::new(&GRANTEE);
        let err = input.set("Nope", "x").unwrap_err();
        assert_eq!(err.field(), Some("Nope"));
        assert!(input.unset("Nope").is_none());
    }

    #[test]
    fn failed_nested_coercion_leaves_input_untouched() {
        let mut grant = Input::new(&GRANT).with("Permission", "READ").unwrap();
        let before = grant.clone();
        let result = grant.set_json("Grantee", &json!({"ID": "abc", "Type": ["bad"]}));
        assert!(result.is_err());
        assert_eq!(grant, before);
    }

    #[test]
    fn set_json_null_clears() {
        let mut grant = Input::new(&GRANT).with("Permission", "READ").unwrap();
        grant.set_json("Permission", &JsonValue::Null).unwrap();
        assert!(!grant.is_set("Permission"));
    }

    #[test]
    fn empty_list_is_distinct_from_absent() {
        let grant = Input::new(&GRANT)
            .with("Labels", Vec::<Value>::new())
            .unwrap();
        assert_eq!(grant.get_list("Labels"), Some(&[][..]));
        assert_eq!(serde_json::to_string(&grant).unwrap(), r#"{"Labels":[]}"#);
    }

    #[test]
    fn serializes_in_declaration_order() {
        let grantee = Input::from_json(
            &GRANTEE,
            &json!({"Type": "CanonicalUser", "DisplayName": "Ann", "ID": "abc"}),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&grantee).unwrap(),
            r#"{"DisplayName":"Ann","ID":"abc","Type":"CanonicalUser"}"#
        );
    }

    #[test]
    fn debug_lists_set_fields() {
        let grantee = Input::new(&GRANTEE).with("ID", "abc").unwrap();
        assert_eq!(format!("{grantee:?}"), r#"Grantee {"ID": String("abc")}"#);
    }
}
