//! Rendering an operation input into a [`WireRequest`].
//!
//! Rendering walks the input shape in declaration order and places each
//! set field according to its [`Location`]. Required fields are checked
//! here and nowhere else; the first missing one, searched depth-first
//! through nested objects and lists, fails the render.

use bytes::Bytes;
use marshal_define::template::{TemplatePart, parse_template};
use marshal_define::{BodyEncoding, Location, LocationKind, OperationSpec, SpecError};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::ser::SerializeMap;
use tracing::{debug, warn};

use crate::error::MarshalError;
use crate::input::Input;
use crate::value::Value;
use crate::wire::WireRequest;

/// Everything except the RFC 3986 unreserved characters.
pub(crate) const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Greedy path labels keep their `/` separators.
const GREEDY: &AsciiSet = &UNRESERVED.remove(b'/');

/// Body-located fields of the top-level input, in declaration order.
struct Body<'a>(&'a Input);

impl Serialize for Body<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (field, value) in self.0.iter() {
            if field.location == Location::Body {
                map.serialize_entry(field.name, value)?;
            }
        }
        map.end()
    }
}

/// Renders `input` for `op`. The input must hold `op.input`.
pub(crate) fn render(
    op: &OperationSpec,
    input: &Input,
    region: Option<&str>,
) -> Result<WireRequest, MarshalError> {
    if let Some(field) = first_missing(input, "") {
        warn!(field = %field, "required field is not set");
        return Err(MarshalError::MissingRequiredField {
            operation: op.qualified_name(),
            field,
        });
    }

    Ok(WireRequest {
        method: op.method,
        path: render_path(op, input)?,
        query: render_query(op, input)?,
        headers: render_headers(op, input)?,
        body: render_body(op, input)?,
        region: region.map(str::to_string),
    })
}

/// Path of the first required field without a value, depth-first.
fn first_missing(input: &Input, prefix: &str) -> Option<String> {
    for field in input.shape().fields {
        let Some(value) = input.get(field.name) else {
            if field.required {
                return Some(format!("{prefix}{}", field.name));
            }
            continue;
        };
        match value {
            Value::Object(nested) => {
                if let Some(path) = first_missing(nested, &format!("{prefix}{}.", field.name)) {
                    return Some(path);
                }
            }
            Value::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if let Value::Object(nested) = item {
                        let nested_prefix = format!("{prefix}{}[{idx}].", field.name);
                        if let Some(path) = first_missing(nested, &nested_prefix) {
                            return Some(path);
                        }
                    }
                }
            }
            Value::String(_) | Value::Integer(_) | Value::Boolean(_) => {}
        }
    }
    None
}

fn scalar_text(
    op: &OperationSpec,
    name: &str,
    value: &Value,
    location: &'static str,
) -> Result<String, MarshalError> {
    value.to_text().ok_or_else(|| {
        SpecError::NonScalarField {
            operation: op.qualified_name(),
            field: name.to_string(),
            ty: value.kind().to_string(),
            location,
        }
        .into()
    })
}

fn render_path(op: &OperationSpec, input: &Input) -> Result<String, MarshalError> {
    let mut path = String::with_capacity(op.path.len());
    for part in parse_template(op.path)? {
        match part {
            TemplatePart::Literal(text) => path.push_str(text),
            TemplatePart::Param { name, greedy } => {
                let bound = op
                    .input
                    .field(name)
                    .is_some_and(|field| field.location == Location::Path);
                if !bound {
                    return Err(SpecError::UnboundPlaceholder {
                        operation: op.qualified_name(),
                        placeholder: name.to_string(),
                    }
                    .into());
                }
                let value = input
                    .get(name)
                    .ok_or_else(|| MarshalError::MissingRequiredField {
                        operation: op.qualified_name(),
                        field: name.to_string(),
                    })?;
                let text = scalar_text(op, name, value, "path")?;
                let set = if greedy { GREEDY } else { UNRESERVED };
                path.extend(utf8_percent_encode(&text, set));
            }
        }
    }
    Ok(path)
}

fn render_query(
    op: &OperationSpec,
    input: &Input,
) -> Result<Vec<(String, String)>, MarshalError> {
    let mut query: Vec<(String, String)> = op
        .query
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    // Empty field values are omitted like absent ones; only fixed pairs
    // may render as a bare key.
    for (field, value) in input.iter() {
        let Location::Query(key) = field.location else {
            continue;
        };
        let items = match value {
            Value::List(items) => items.as_slice(),
            scalar => std::slice::from_ref(scalar),
        };
        for item in items {
            let text = scalar_text(op, field.name, item, "query")?;
            if !text.is_empty() {
                query.push((key.to_string(), text));
            }
        }
    }
    Ok(query)
}

fn render_headers(
    op: &OperationSpec,
    input: &Input,
) -> Result<Vec<(String, String)>, MarshalError> {
    let mut headers: Vec<(String, String)> = op
        .headers
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    for (field, value) in input.iter() {
        let Location::Header(name) = field.location else {
            continue;
        };
        if op.header(name).is_some() {
            debug!(header = name, field = field.name, "fixed header wins over field header");
            continue;
        }
        headers.push((name.to_string(), scalar_text(op, field.name, value, "header")?));
    }
    Ok(headers)
}

fn render_body(op: &OperationSpec, input: &Input) -> Result<Bytes, MarshalError> {
    match op.encoding {
        BodyEncoding::Json => Ok(Bytes::from(serde_json::to_vec(&Body(input))?)),
        BodyEncoding::None => {
            if let Some(field) = input.shape().fields_in(LocationKind::Body).find(|field| {
                input.is_set(field.name)
            }) {
                return Err(SpecError::BodyWithoutEncoding {
                    operation: op.qualified_name(),
                    field: field.name.to_string(),
                }
                .into());
            }
            Ok(Bytes::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marshal_define::{Element, FieldDescriptor, RestMethod, Shape};
    use serde_json::json;

    static LEAF_FIELDS: [FieldDescriptor; 2] = [
        FieldDescriptor::string("Name").required(),
        FieldDescriptor::string("Value"),
    ];
    static LEAF: Shape = Shape::new("Leaf", &LEAF_FIELDS);

    static ROOT_FIELDS: [FieldDescriptor; 3] = [
        FieldDescriptor::string("Id").required().in_path(),
        FieldDescriptor::list("Leaves", Element::Object(&LEAF)),
        FieldDescriptor::boolean("Force").in_query("force"),
    ];
    static ROOT: Shape = Shape::new("Root", &ROOT_FIELDS);

    static OP: OperationSpec = OperationSpec {
        service: "Test",
        name: "Put",
        description: "",
        method: RestMethod::Put,
        path: "/roots/{Id}",
        headers: &[],
        query: &[],
        encoding: BodyEncoding::Json,
        input: &ROOT,
    };

    static BROKEN: OperationSpec = OperationSpec {
        service: "Test",
        name: "Broken",
        description: "",
        method: RestMethod::Put,
        path: "/roots/{Other}",
        headers: &[],
        query: &[],
        encoding: BodyEncoding::Json,
        input: &ROOT,
    };

    #[test]
    fn missing_path_is_depth_first() {
        let input = Input::from_json(
            &ROOT,
            &json!({"Id": "r", "Leaves": [{"Name": "a"}, {"Value": "b"}]}),
        )
        .unwrap();
        assert_eq!(first_missing(&input, "").as_deref(), Some("Leaves[1].Name"));
    }

    #[test]
    fn top_level_missing_uses_bare_name() {
        let input = Input::new(&ROOT);
        assert_eq!(first_missing(&input, "").as_deref(), Some("Id"));
    }

    #[test]
    fn path_segments_are_encoded() {
        let input = Input::new(&ROOT).with("Id", "a/b c").unwrap();
        assert_eq!(render_path(&OP, &input).unwrap(), "/roots/a%2Fb%20c");
    }

    #[test]
    fn booleans_render_as_literals() {
        let input = Input::new(&ROOT).with("Force", false).unwrap();
        assert_eq!(
            render_query(&OP, &input).unwrap(),
            vec![("force".to_string(), "false".to_string())]
        );
    }

    static HEADER_FIELDS: [FieldDescriptor; 1] =
        [FieldDescriptor::string("Kind").in_header("content-type")];
    static HEADER_SHAPE: Shape = Shape::new("KindInput", &HEADER_FIELDS);
    static HEADER_OP: OperationSpec = OperationSpec {
        service: "Test",
        name: "Kind",
        description: "",
        method: RestMethod::Post,
        path: "/",
        headers: &[("Content-Type", "application/json")],
        query: &[],
        encoding: BodyEncoding::Json,
        input: &HEADER_SHAPE,
    };

    #[test]
    #[tracing_test::traced_test]
    fn missing_field_is_logged() {
        let _ = render(&OP, &Input::new(&ROOT), None);
        assert!(logs_contain("required field is not set"));
        assert!(logs_contain("field=Id"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn dropped_header_is_logged() {
        let input = Input::new(&HEADER_SHAPE).with("Kind", "text/plain").unwrap();
        let request = render(&HEADER_OP, &input, None).unwrap();
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.headers().len(), 1);
        assert!(logs_contain("fixed header wins over field header"));
    }

    #[test]
    fn unbound_placeholder_is_a_definition_error() {
        let input = Input::new(&ROOT).with("Id", "r").unwrap();
        let err = render(&BROKEN, &input, None).unwrap_err();
        assert!(matches!(
            err,
            MarshalError::Definition(SpecError::UnboundPlaceholder { .. })
        ));
    }
}
