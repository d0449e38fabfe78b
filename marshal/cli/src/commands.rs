//! `list`, `describe`, `render` and `send`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use marshal::transport::{ReqwestTransport, Transport};
use marshal::{OperationInput, WireRequest};
use marshal_define::{FieldDescriptor, FieldType, Location, OperationSpec, Shape};
use marshal_definitions::{find_operation, operations};
use serde_json::Value as JsonValue;
use tracing::info;
use url::Url;

use crate::error::CliError;

/// Output format of a rendered request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Request line, headers, blank line, body.
    #[default]
    Http,
    /// The wire request as a JSON document.
    Json,
}

/// Resolves `name` against the registry.
pub fn lookup(name: &str) -> Result<&'static OperationSpec, CliError> {
    find_operation(name).ok_or_else(|| CliError::UnknownOperation(name.to_string()))
}

/// Lists registered operations, optionally restricted to one service.
pub fn list(out: &mut impl Write, service: Option<&str>) -> Result<(), CliError> {
    for op in operations()
        .iter()
        .filter(|op| service.is_none_or(|s| op.service.eq_ignore_ascii_case(s)))
    {
        writeln!(
            out,
            "{:<45} {:<7} {}",
            op.qualified_name().bold(),
            op.method.to_string().cyan(),
            op.path
        )?;
    }
    Ok(())
}

/// Prints an operation's table, as text or JSON.
pub fn describe(out: &mut impl Write, name: &str, json: bool) -> Result<(), CliError> {
    let op = lookup(name)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(op)?)?;
        return Ok(());
    }

    writeln!(out, "{}", op.qualified_name().bold())?;
    writeln!(out, "  {}", op.description)?;
    writeln!(out, "  {} {}", op.method.to_string().cyan(), op.path)?;
    for (name, value) in op.headers {
        writeln!(out, "  {name}: {value}")?;
    }
    writeln!(out)?;
    write_shape(out, op.input, 0)?;

    let mut nested: Vec<&'static Shape> = Vec::new();
    collect_nested(op.input, &mut nested);
    for shape in nested {
        writeln!(out)?;
        write_shape(out, shape, 0)?;
    }
    Ok(())
}

fn write_shape(out: &mut impl Write, shape: &Shape, indent: usize) -> io::Result<()> {
    writeln!(out, "{:indent$}{}", "", shape.name.bold())?;
    for field in shape.fields {
        writeln!(out, "{:indent$}  {}", "", field_line(field))?;
    }
    Ok(())
}

fn field_line(field: &FieldDescriptor) -> String {
    // Pad before styling: escape codes would otherwise count toward the width.
    let required = if field.required {
        format!("{:<9}", "required").red()
    } else {
        format!("{:<9}", "optional").dimmed()
    };
    let location = match field.location {
        Location::Body => "body".to_string(),
        Location::Path => "path".to_string(),
        Location::Query(key) => format!("query:{key}"),
        Location::Header(name) => format!("header:{name}"),
    };
    let mut line = format!(
        "{:<24} {:<22} {} {}",
        field.name,
        field.ty.type_name(),
        required,
        location
    );
    if let Some(description) = field.description {
        line.push_str(&format!("  {}", description.dimmed()));
    }
    line
}

/// Nested shapes reachable from `shape`, each listed once.
fn collect_nested(shape: &'static Shape, seen: &mut Vec<&'static Shape>) {
    for field in shape.fields {
        let nested = match field.ty {
            FieldType::Object(nested) => nested,
            FieldType::List(element) => match FieldType::from(element) {
                FieldType::Object(nested) => nested,
                _ => continue,
            },
            _ => continue,
        };
        if !seen.contains(&nested) {
            seen.push(nested);
            collect_nested(nested, seen);
        }
    }
}

/// Reads the input mapping from a file, from stdin (`-`), or defaults to `{}`.
pub fn read_input(path: Option<&Path>) -> Result<JsonValue, CliError> {
    let Some(path) = path else {
        return Ok(JsonValue::Object(Default::default()));
    };

    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::ReadInput {
                path: path.to_path_buf(),
                source,
            })?;
        text
    } else {
        fs::read_to_string(path).map_err(|source| CliError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?
    };
    Ok(serde_json::from_str(&text)?)
}

/// Builds and renders an operation input.
///
/// `region` overrides any `@region` key in the mapping.
pub fn build_request(
    name: &str,
    mapping: &JsonValue,
    region: Option<&str>,
) -> Result<WireRequest, CliError> {
    let op = lookup(name)?;
    op.validate()?;

    let mut input = OperationInput::from_json(op, mapping)?;
    if let Some(region) = region {
        input.set_region(region);
    }
    Ok(input.render()?)
}

/// Renders an operation and prints the wire request.
pub fn render(
    out: &mut impl Write,
    name: &str,
    mapping: &JsonValue,
    region: Option<&str>,
    format: RenderFormat,
) -> Result<(), CliError> {
    let request = build_request(name, mapping, region)?;
    match format {
        RenderFormat::Http => writeln!(out, "{request}")?,
        RenderFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&request)?)?,
    }
    Ok(())
}

/// Renders an operation, sends it to `endpoint` and prints the response.
///
/// ## Errors
///
/// Besides marshalling and transport failures, a non-2xx status is
/// reported as [`CliError::HttpStatus`] after the body is printed.
pub async fn send(
    out: &mut impl Write,
    name: &str,
    mapping: &JsonValue,
    region: Option<&str>,
    endpoint: &str,
    timeout: Duration,
) -> Result<(), CliError> {
    let request = build_request(name, mapping, region)?;
    let transport = ReqwestTransport::builder(Url::parse(endpoint)?)
        .timeout(timeout)
        .build()?;

    info!(operation = name, endpoint, "sending request");
    let response = transport.send(request).await?;

    let status = if response.is_success() {
        response.status.to_string().green()
    } else {
        response.status.to_string().red()
    };
    writeln!(out, "{} {status}", "HTTP".bold())?;
    writeln!(out, "{}", String::from_utf8_lossy(&response.body))?;

    if response.is_success() {
        Ok(())
    } else {
        Err(CliError::HttpStatus(response.status))
    }
}
