//! Marshal Definition Library
//!
//! Declarative primitives for describing remote operations as data. A
//! generic request marshaller (the `marshal` crate) reads these tables to
//! build, validate and render requests, so no per-operation code is
//! written by hand.
//!
//! ## Core Types
//!
//! - [`RestMethod`] - HTTP methods
//! - [`FieldDescriptor`] - One named field: type, required flag, location
//! - [`FieldType`] / [`Element`] - Semantic field and list element types
//! - [`Location`] - Body, path, query or header placement
//! - [`Shape`] - A named, ordered field table (nested types and inputs)
//! - [`OperationSpec`] - Method, path template, fixed headers and query,
//!   body encoding and input shape of one operation
//! - [`BodyEncoding`] - JSON object or no body
//! - [`SpecError`] - Definition-time table errors
//!
//! ## Examples
//!
//! ```
//! use marshal_define::prelude::*;
//!
//! static CREATE_GROUP_FIELDS: [FieldDescriptor; 3] = [
//!     FieldDescriptor::string("GroupName").required(),
//!     FieldDescriptor::string("UserPoolId").required(),
//!     FieldDescriptor::integer("Precedence"),
//! ];
//! static CREATE_GROUP_REQUEST: Shape = Shape::new("CreateGroupRequest", &CREATE_GROUP_FIELDS);
//!
//! static CREATE_GROUP: OperationSpec = OperationSpec {
//!     service: "CognitoIdentityProvider",
//!     name: "CreateGroup",
//!     description: "Creates a new group in the specified user pool",
//!     method: RestMethod::Post,
//!     path: "/",
//!     headers: &[("X-Amz-Target", "AWSCognitoIdentityProviderService.CreateGroup")],
//!     query: &[],
//!     encoding: BodyEncoding::Json,
//!     input: &CREATE_GROUP_REQUEST,
//! };
//!
//! assert!(CREATE_GROUP.validate().is_ok());
//! assert_eq!(CREATE_GROUP.input.required_fields().count(), 2);
//! ```

pub mod error;
pub mod field;
pub mod method;
pub mod operation;
pub mod prelude;
pub mod template;

// Re-export main types at crate root
pub use error::SpecError;
pub use field::{Element, FieldDescriptor, FieldType, Location, LocationKind, Shape};
pub use method::RestMethod;
pub use operation::{BodyEncoding, OperationSpec};
