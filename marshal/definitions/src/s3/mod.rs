//! Amazon S3 object ACL operations.
//!
//! These are REST-style operations: the bucket and key travel in the path,
//! options in headers and the query string. S3 itself exchanges XML
//! documents; here the `AccessControlPolicy` member is rendered as a JSON
//! object, the one body encoding the marshaller produces.
//!
//! ## Operations
//!
//! - [`PUT_OBJECT_ACL`] - `PUT /{Bucket}/{Key+}?acl`
//! - [`GET_OBJECT_ACL`] - `GET /{Bucket}/{Key+}?acl`

mod shapes;

pub use shapes::{
    ACCESS_CONTROL_POLICY, GET_OBJECT_ACL_REQUEST, GRANT, GRANTEE, OWNER, PUT_OBJECT_ACL_REQUEST,
};

use marshal_define::{BodyEncoding, OperationSpec, RestMethod};

/// Service name shared by every S3 operation.
pub const SERVICE: &str = "S3";

/// Sets the access control list of an existing object.
pub static PUT_OBJECT_ACL: OperationSpec = OperationSpec {
    service: SERVICE,
    name: "PutObjectAcl",
    description: "Sets the access control list permissions for an object",
    method: RestMethod::Put,
    path: "/{Bucket}/{Key+}",
    headers: &[("Content-Type", "application/json")],
    query: &[("acl", "")],
    encoding: BodyEncoding::Json,
    input: &PUT_OBJECT_ACL_REQUEST,
};

/// Reads the access control list of an object.
pub static GET_OBJECT_ACL: OperationSpec = OperationSpec {
    service: SERVICE,
    name: "GetObjectAcl",
    description: "Returns the access control list of an object",
    method: RestMethod::Get,
    path: "/{Bucket}/{Key+}",
    headers: &[],
    query: &[("acl", "")],
    encoding: BodyEncoding::None,
    input: &GET_OBJECT_ACL_REQUEST,
};
