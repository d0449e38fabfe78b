//! S3 access-control shapes.

use marshal_define::{Element, FieldDescriptor, Shape};

static GRANTEE_FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor::string("DisplayName").with_description("Screen name of the grantee"),
    FieldDescriptor::string("EmailAddress").with_description("Email address of the grantee"),
    FieldDescriptor::string("ID").with_description("The canonical user ID of the grantee"),
    FieldDescriptor::string("Type")
        .required()
        .with_description("CanonicalUser, AmazonCustomerByEmail or Group"),
    FieldDescriptor::string("URI").with_description("URI of the grantee group"),
];

/// The person being granted permissions.
pub static GRANTEE: Shape = Shape::new("Grantee", &GRANTEE_FIELDS);

static GRANT_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::object("Grantee", &GRANTEE),
    FieldDescriptor::string("Permission")
        .with_description("FULL_CONTROL, WRITE, WRITE_ACP, READ or READ_ACP"),
];

/// A grantee and the permission given to it.
pub static GRANT: Shape = Shape::new("Grant", &GRANT_FIELDS);

static OWNER_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::string("DisplayName"),
    FieldDescriptor::string("ID"),
];

/// Owner of a bucket or object.
pub static OWNER: Shape = Shape::new("Owner", &OWNER_FIELDS);

static ACCESS_CONTROL_POLICY_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::list("Grants", Element::Object(&GRANT)),
    FieldDescriptor::object("Owner", &OWNER),
];

/// An access control list together with its owner.
pub static ACCESS_CONTROL_POLICY: Shape =
    Shape::new("AccessControlPolicy", &ACCESS_CONTROL_POLICY_FIELDS);

static PUT_OBJECT_ACL_REQUEST_FIELDS: [FieldDescriptor; 12] = [
    FieldDescriptor::string("ACL")
        .in_header("x-amz-acl")
        .with_description("The canned ACL to apply to the object"),
    FieldDescriptor::object("AccessControlPolicy", &ACCESS_CONTROL_POLICY),
    FieldDescriptor::string("Bucket").required().in_path(),
    FieldDescriptor::string("ContentMD5").in_header("Content-MD5"),
    FieldDescriptor::string("GrantFullControl").in_header("x-amz-grant-full-control"),
    FieldDescriptor::string("GrantRead").in_header("x-amz-grant-read"),
    FieldDescriptor::string("GrantReadACP").in_header("x-amz-grant-read-acp"),
    FieldDescriptor::string("GrantWriteACP").in_header("x-amz-grant-write-acp"),
    FieldDescriptor::string("Key").required().in_path(),
    FieldDescriptor::string("RequestPayer").in_header("x-amz-request-payer"),
    FieldDescriptor::string("VersionId").in_query("versionId"),
    FieldDescriptor::string("ExpectedBucketOwner").in_header("x-amz-expected-bucket-owner"),
];

/// Input of `PutObjectAcl`.
pub static PUT_OBJECT_ACL_REQUEST: Shape =
    Shape::new("PutObjectAclRequest", &PUT_OBJECT_ACL_REQUEST_FIELDS);

static GET_OBJECT_ACL_REQUEST_FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor::string("Bucket").required().in_path(),
    FieldDescriptor::string("Key").required().in_path(),
    FieldDescriptor::string("VersionId").in_query("versionId"),
    FieldDescriptor::string("RequestPayer").in_header("x-amz-request-payer"),
    FieldDescriptor::string("ExpectedBucketOwner").in_header("x-amz-expected-bucket-owner"),
];

/// Input of `GetObjectAcl`.
pub static GET_OBJECT_ACL_REQUEST: Shape =
    Shape::new("GetObjectAclRequest", &GET_OBJECT_ACL_REQUEST_FIELDS);
