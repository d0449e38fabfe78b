//! Marshal Operation Definitions
//!
//! Static operation tables built from the `marshal-define` primitives. This
//! crate is the Schema Registry: the marshaller looks operations up here
//! and never needs per-operation code.
//!
//! ## Available Services
//!
//! - [`cognito`] - Cognito Identity Provider (`CreateGroup`, `AdminUpdateUserAttributes`)
//! - [`stepfunctions`] - Step Functions task callbacks (`SendTaskFailure`, ...)
//! - [`s3`] - S3 object ACLs (`PutObjectAcl`, `GetObjectAcl`) and the
//!   `Grantee`/`Grant`/`Owner`/`AccessControlPolicy` shapes
//!
//! ## Examples
//!
//! ```
//! use marshal_definitions::{find_operation, operations};
//!
//! let op = find_operation("StepFunctions.SendTaskFailure").unwrap();
//! assert_eq!(op.name, "SendTaskFailure");
//! assert!(find_operation("creategroup").is_some());
//! assert!(operations().iter().all(|op| op.validate().is_ok()));
//! ```

pub mod cognito;
pub mod prelude;
pub mod s3;
pub mod stepfunctions;

use marshal_define::OperationSpec;

static OPERATIONS: [&OperationSpec; 7] = [
    &cognito::CREATE_GROUP,
    &cognito::ADMIN_UPDATE_USER_ATTRIBUTES,
    &stepfunctions::SEND_TASK_FAILURE,
    &stepfunctions::SEND_TASK_SUCCESS,
    &stepfunctions::SEND_TASK_HEARTBEAT,
    &s3::PUT_OBJECT_ACL,
    &s3::GET_OBJECT_ACL,
];

/// Every registered operation, grouped by service.
pub fn operations() -> &'static [&'static OperationSpec] {
    &OPERATIONS
}

/// Finds an operation by `Service.Operation` or by bare operation name.
///
/// Names compare ignoring ASCII case. A bare name that exists in several
/// services resolves to the first registered one.
pub fn find_operation(name: &str) -> Option<&'static OperationSpec> {
    let (service, operation) = match name.split_once('.') {
        Some((service, operation)) => (Some(service), operation),
        None => (None, name),
    };

    OPERATIONS.iter().copied().find(|op| {
        op.name.eq_ignore_ascii_case(operation)
            && service.is_none_or(|service| op.service.eq_ignore_ascii_case(service))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_lookup() {
        let op = find_operation("CognitoIdentityProvider.CreateGroup").unwrap();
        assert_eq!(op.qualified_name(), "CognitoIdentityProvider.CreateGroup");
    }

    #[test]
    fn wrong_service_does_not_match() {
        assert!(find_operation("S3.CreateGroup").is_none());
        assert!(find_operation("DeleteGroup").is_none());
    }

    #[test]
    fn qualified_names_are_unique() {
        let mut names: Vec<_> = operations().iter().map(|op| op.qualified_name()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
