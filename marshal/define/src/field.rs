//! Field descriptors and the shapes built from them.
//!
//! A [`Shape`] is a named, ordered table of [`FieldDescriptor`]s. Every
//! nested type (a `Grantee`, a `Grant`) and every operation input is a
//! shape. Tables are `static` data assembled with `const fn` builders:
//!
//! ```
//! use marshal_define::{FieldDescriptor, Shape};
//!
//! static GRANTEE_FIELDS: [FieldDescriptor; 2] = [
//!     FieldDescriptor::string("ID"),
//!     FieldDescriptor::string("Type").required(),
//! ];
//! static GRANTEE: Shape = Shape::new("Grantee", &GRANTEE_FIELDS);
//!
//! assert_eq!(GRANTEE.fields.len(), 2);
//! assert!(GRANTEE.field("Type").unwrap().required);
//! assert_eq!(GRANTEE.position("ID"), Some(0));
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// Serializes a shape reference by name so recursive shapes stay finite.
fn shape_name<S: Serializer>(shape: &&'static Shape, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(shape.name)
}

/// The type of a single list element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "shape", rename_all = "snake_case")]
pub enum Element {
    /// UTF-8 string.
    String,
    /// Signed 64-bit integer.
    Integer,
    /// Boolean.
    Boolean,
    /// Nested object of the given shape.
    Object(#[serde(serialize_with = "shape_name")] &'static Shape),
}

impl Element {
    /// Returns `true` for string, integer and boolean elements.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Object(_))
    }

    /// Short human-readable type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object(shape) => shape.name,
        }
    }
}

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum FieldType {
    /// UTF-8 string.
    String,
    /// Signed 64-bit integer.
    Integer,
    /// Boolean.
    Boolean,
    /// Nested object of the given shape.
    Object(#[serde(serialize_with = "shape_name")] &'static Shape),
    /// Ordered list of elements.
    List(Element),
}

impl FieldType {
    /// Returns `true` for string, integer and boolean fields.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::String | Self::Integer | Self::Boolean)
    }

    /// Returns `true` for lists whose elements are scalars.
    pub fn is_scalar_list(&self) -> bool {
        matches!(self, Self::List(element) if element.is_scalar())
    }

    /// Short human-readable type name used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Integer => "integer".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Object(shape) => shape.name.to_string(),
            Self::List(element) => format!("list<{}>", element.type_name()),
        }
    }
}

impl From<Element> for FieldType {
    fn from(element: Element) -> Self {
        match element {
            Element::String => Self::String,
            Element::Integer => Self::Integer,
            Element::Boolean => Self::Boolean,
            Element::Object(shape) => Self::Object(shape),
        }
    }
}

/// Where a field is placed in the rendered request.
///
/// Only the fields of an operation's input shape may leave the body;
/// fields of nested shapes always render inside their parent object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "in", content = "key", rename_all = "snake_case")]
pub enum Location {
    /// Member of the JSON body object, keyed by the field name.
    Body,
    /// Substituted into the `{Name}` placeholder of the path template.
    Path,
    /// Query parameter with the given key.
    Query(&'static str),
    /// Request header with the given name.
    Header(&'static str),
}

/// Describes one named field of a [`Shape`].
///
/// Fields are optional and body-located unless the builder says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name. This is the JSON key for body fields and the
    /// placeholder name for path fields.
    pub name: &'static str,
    /// Semantic type.
    #[serde(rename = "type")]
    pub ty: FieldType,
    /// Whether a value must be present at render time.
    pub required: bool,
    /// Placement in the rendered request.
    pub location: Location,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl FieldDescriptor {
    /// Creates an optional body field of the given type.
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: false,
            location: Location::Body,
            description: None,
        }
    }

    /// Creates an optional string field.
    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldType::String)
    }

    /// Creates an optional integer field.
    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldType::Integer)
    }

    /// Creates an optional boolean field.
    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldType::Boolean)
    }

    /// Creates an optional nested-object field.
    pub const fn object(name: &'static str, shape: &'static Shape) -> Self {
        Self::new(name, FieldType::Object(shape))
    }

    /// Creates an optional list field.
    pub const fn list(name: &'static str, element: Element) -> Self {
        Self::new(name, FieldType::List(element))
    }

    /// Marks the field as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Places the field in the path template.
    pub const fn in_path(mut self) -> Self {
        self.location = Location::Path;
        self
    }

    /// Places the field in the query string under `key`.
    pub const fn in_query(mut self, key: &'static str) -> Self {
        self.location = Location::Query(key);
        self
    }

    /// Places the field in the header `name`.
    pub const fn in_header(mut self, name: &'static str) -> Self {
        self.location = Location::Header(name);
        self
    }

    /// Attaches a description.
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// The key this field is emitted under on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self.location {
            Location::Body | Location::Path => self.name,
            Location::Query(key) | Location::Header(key) => key,
        }
    }
}

/// A named, ordered set of field descriptors.
///
/// Shapes are compared by identity or name: two shapes with the same name
/// are the same type. This keeps comparison and `Debug` finite for
/// recursive shapes.
#[derive(Clone, Copy, Serialize)]
pub struct Shape {
    /// Type name, e.g. `"Grantee"` or `"CreateGroupRequest"`.
    pub name: &'static str,
    /// Fields in declaration order. The order fixes body key order.
    pub fields: &'static [FieldDescriptor],
}

impl Shape {
    /// Creates a shape from a static field table.
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { name, fields }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the declaration index of a field.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Iterates over required fields in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.fields.iter().filter(|field| field.required)
    }

    /// Iterates over fields placed at `location`'s kind.
    pub fn fields_in(&self, location: LocationKind) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.fields
            .iter()
            .filter(move |field| LocationKind::of(&field.location) == location)
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }
}

impl Eq for Shape {}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|field| field.name).collect();
        f.debug_struct("Shape")
            .field("name", &self.name)
            .field("fields", &names)
            .finish()
    }
}

/// [`Location`] without its key, for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Body,
    Path,
    Query,
    Header,
}

impl LocationKind {
    /// Classifies a location.
    pub fn of(location: &Location) -> Self {
        match location {
            Location::Body => Self::Body,
            Location::Path => Self::Path,
            Location::Query(_) => Self::Query,
            Location::Header(_) => Self::Header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static OWNER_FIELDS: [FieldDescriptor; 2] = [
        FieldDescriptor::string("DisplayName"),
        FieldDescriptor::string("ID"),
    ];
    static OWNER: Shape = Shape::new("Owner", &OWNER_FIELDS);

    static NODE_FIELDS: [FieldDescriptor; 2] = [
        FieldDescriptor::string("Label").required(),
        FieldDescriptor::list("Children", Element::Object(&NODE)),
    ];
    static NODE: Shape = Shape::new("Node", &NODE_FIELDS);

    #[test]
    fn builders_default_to_optional_body_fields() {
        let field = FieldDescriptor::string("Description");
        assert!(!field.required);
        assert_eq!(field.location, Location::Body);
        assert_eq!(field.wire_name(), "Description");
        assert!(field.description.is_none());
    }

    #[test]
    fn builder_chaining_sets_location_and_flags() {
        let field = FieldDescriptor::string("VersionId")
            .in_query("versionId")
            .with_description("Object version");
        assert_eq!(field.location, Location::Query("versionId"));
        assert_eq!(field.wire_name(), "versionId");
        assert_eq!(field.description, Some("Object version"));

        let header = FieldDescriptor::string("ACL").in_header("x-amz-acl");
        assert_eq!(header.wire_name(), "x-amz-acl");

        let path = FieldDescriptor::string("Bucket").required().in_path();
        assert!(path.required);
        assert_eq!(path.wire_name(), "Bucket");
    }

    #[test]
    fn shape_lookup_by_name() {
        assert_eq!(OWNER.position("ID"), Some(1));
        assert!(OWNER.field("Missing").is_none());
        assert_eq!(OWNER.required_fields().count(), 0);
    }

    #[test]
    fn recursive_shapes_compare_and_debug() {
        assert_eq!(NODE, NODE);
        assert_ne!(NODE, OWNER);
        let debug = format!("{NODE:?}");
        assert!(debug.contains("Children"));
    }

    #[test]
    fn type_names() {
        assert_eq!(FieldType::Integer.type_name(), "integer");
        assert_eq!(FieldType::Object(&OWNER).type_name(), "Owner");
        assert_eq!(
            FieldType::List(Element::Object(&OWNER)).type_name(),
            "list<Owner>"
        );
        assert!(FieldType::List(Element::String).is_scalar_list());
        assert!(!FieldType::List(Element::Object(&OWNER)).is_scalar_list());
    }

    #[test]
    fn serializes_nested_shapes_by_name() {
        let json = serde_json::to_value(&NODE).unwrap();
        assert_eq!(json["name"], "Node");
        assert_eq!(json["fields"][1]["type"]["kind"], "list");
        assert_eq!(json["fields"][1]["type"]["of"]["shape"], "Node");
        assert_eq!(json["fields"][0]["location"]["in"], "body");
    }
}
