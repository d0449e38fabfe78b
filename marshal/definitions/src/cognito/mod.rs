//! Amazon Cognito Identity Provider operations.
//!
//! Cognito speaks the AWS JSON 1.1 protocol: every call is a `POST /` with
//! the operation selected by the `X-Amz-Target` header.
//!
//! ## Operations
//!
//! - [`CREATE_GROUP`] - `AWSCognitoIdentityProviderService.CreateGroup`
//! - [`ADMIN_UPDATE_USER_ATTRIBUTES`] - `AWSCognitoIdentityProviderService.AdminUpdateUserAttributes`

mod shapes;

pub use shapes::{ADMIN_UPDATE_USER_ATTRIBUTES_REQUEST, ATTRIBUTE_TYPE, CREATE_GROUP_REQUEST};

use marshal_define::{BodyEncoding, OperationSpec, RestMethod};

/// Service name shared by every Cognito operation.
pub const SERVICE: &str = "CognitoIdentityProvider";

/// Creates a new group in the specified user pool.
pub static CREATE_GROUP: OperationSpec = OperationSpec {
    service: SERVICE,
    name: "CreateGroup",
    description: "Creates a new group in the specified user pool",
    method: RestMethod::Post,
    path: "/",
    headers: &[
        ("Content-Type", "application/x-amz-json-1.1"),
        ("X-Amz-Target", "AWSCognitoIdentityProviderService.CreateGroup"),
        ("Accept", "application/json"),
    ],
    query: &[],
    encoding: BodyEncoding::Json,
    input: &CREATE_GROUP_REQUEST,
};

/// Updates the specified user's attributes as an administrator.
pub static ADMIN_UPDATE_USER_ATTRIBUTES: OperationSpec = OperationSpec {
    service: SERVICE,
    name: "AdminUpdateUserAttributes",
    description: "Updates the specified user's attributes as an administrator",
    method: RestMethod::Post,
    path: "/",
    headers: &[
        ("Content-Type", "application/x-amz-json-1.1"),
        (
            "X-Amz-Target",
            "AWSCognitoIdentityProviderService.AdminUpdateUserAttributes",
        ),
        ("Accept", "application/json"),
    ],
    query: &[],
    encoding: BodyEncoding::Json,
    input: &ADMIN_UPDATE_USER_ATTRIBUTES_REQUEST,
};

#[cfg(test)]
mod tests {
    use super::*;
    use marshal_define::{FieldType, Location};

    #[test]
    fn create_group_table_validates() {
        assert_eq!(CREATE_GROUP.validate(), Ok(()));
        assert_eq!(ADMIN_UPDATE_USER_ATTRIBUTES.validate(), Ok(()));
    }

    #[test]
    fn create_group_field_order_and_required() {
        let names: Vec<_> = CREATE_GROUP.input.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["GroupName", "UserPoolId", "Description", "RoleArn", "Precedence"]
        );
        let required: Vec<_> = CREATE_GROUP.input.required_fields().map(|f| f.name).collect();
        assert_eq!(required, vec!["GroupName", "UserPoolId"]);
        assert_eq!(
            CREATE_GROUP.input.field("Precedence").unwrap().ty,
            FieldType::Integer
        );
    }

    #[test]
    fn json_protocol_headers() {
        assert_eq!(
            CREATE_GROUP.header("x-amz-target"),
            Some("AWSCognitoIdentityProviderService.CreateGroup")
        );
        assert_eq!(
            CREATE_GROUP.header("Content-Type"),
            Some("application/x-amz-json-1.1")
        );
        assert!(CREATE_GROUP.input.fields.iter().all(|f| f.location == Location::Body));
    }
}
