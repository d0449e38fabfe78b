//! HTTP methods used by operation tables.

use serde::Serialize;
use strum::Display;

/// HTTP method an operation is sent with.
///
/// ## Examples
///
/// ```
/// use marshal_define::RestMethod;
///
/// let method = RestMethod::Put;
/// assert!(method.has_body());
/// assert!(!RestMethod::Get.has_body());
/// assert_eq!(method.to_string(), "PUT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP PATCH - Partially update a resource.
    Patch,
    /// HTTP DELETE - Remove a resource.
    Delete,
    /// HTTP HEAD - Retrieve headers only.
    Head,
    /// HTTP OPTIONS - Query supported methods.
    Options,
}

impl RestMethod {
    /// Returns `true` if this method carries a request body.
    ///
    /// Operations sent with any other method must use
    /// [`BodyEncoding::None`](crate::BodyEncoding::None).
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}
