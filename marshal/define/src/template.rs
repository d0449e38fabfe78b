//! Path template parsing.
//!
//! Templates use `{Name}` placeholders that are replaced by the value of the
//! path field `Name`. A trailing `+` (`{Key+}`) marks a greedy placeholder
//! whose value may contain `/`.

use crate::error::SpecError;

/// One piece of a parsed path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePart<'a> {
    /// Text copied verbatim.
    Literal(&'a str),
    /// Placeholder for a path field.
    Param {
        /// Field name inside the braces, without the greedy marker.
        name: &'a str,
        /// `true` for `{Name+}`.
        greedy: bool,
    },
}

/// Splits a path template into literal text and placeholders.
///
/// ## Examples
///
/// ```
/// use marshal_define::template::{parse_template, TemplatePart};
///
/// let parts = parse_template("/{Bucket}/{Key+}").unwrap();
/// assert_eq!(
///     parts,
///     vec![
///         TemplatePart::Literal("/"),
///         TemplatePart::Param { name: "Bucket", greedy: false },
///         TemplatePart::Literal("/"),
///         TemplatePart::Param { name: "Key", greedy: true },
///     ]
/// );
/// ```
///
/// ## Errors
///
/// Returns [`SpecError::InvalidPathTemplate`] for templates that do not
/// start with `/`, contain a `?`, have an unclosed or nested brace, a stray
/// `}`, or an empty placeholder.
pub fn parse_template(template: &str) -> Result<Vec<TemplatePart<'_>>, SpecError> {
    if !template.starts_with('/') {
        return Err(SpecError::invalid_template(template, "must start with '/'"));
    }
    if template.contains('?') {
        return Err(SpecError::invalid_template(
            template,
            "query pairs belong in the operation's query table",
        ));
    }

    let mut parts = Vec::new();
    let mut literal_start = 0;
    let mut open: Option<usize> = None;

    for (idx, c) in template.char_indices() {
        match (c, open) {
            ('{', None) => {
                if idx > literal_start {
                    parts.push(TemplatePart::Literal(&template[literal_start..idx]));
                }
                open = Some(idx + 1);
            }
            ('{', Some(_)) => {
                return Err(SpecError::invalid_template(template, "nested '{'"));
            }
            ('}', Some(start)) => {
                let raw = &template[start..idx];
                let (name, greedy) = match raw.strip_suffix('+') {
                    Some(name) => (name, true),
                    None => (raw, false),
                };
                if name.is_empty() {
                    return Err(SpecError::invalid_template(template, "empty placeholder"));
                }
                parts.push(TemplatePart::Param { name, greedy });
                open = None;
                literal_start = idx + 1;
            }
            ('}', None) => {
                return Err(SpecError::invalid_template(template, "unmatched '}'"));
            }
            _ => {}
        }
    }

    if open.is_some() {
        return Err(SpecError::invalid_template(template, "unclosed '{'"));
    }
    if literal_start < template.len() {
        parts.push(TemplatePart::Literal(&template[literal_start..]));
    }

    Ok(parts)
}

/// Returns placeholder names in the order they appear.
///
/// ## Examples
///
/// ```
/// use marshal_define::template::placeholders;
///
/// assert_eq!(placeholders("/").unwrap(), Vec::<&str>::new());
/// assert_eq!(placeholders("/{Bucket}/{Key+}").unwrap(), vec!["Bucket", "Key"]);
/// ```
///
/// ## Errors
///
/// Same as [`parse_template`].
pub fn placeholders(template: &str) -> Result<Vec<&str>, SpecError> {
    Ok(parse_template(template)?
        .into_iter()
        .filter_map(|part| match part {
            TemplatePart::Param { name, .. } => Some(name),
            TemplatePart::Literal(_) => None,
        })
        .collect())
}
