//! Cognito Identity Provider input shapes.

use marshal_define::{Element, FieldDescriptor, Shape};

static CREATE_GROUP_REQUEST_FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor::string("GroupName")
        .required()
        .with_description("A name for the group, unique in the user pool"),
    FieldDescriptor::string("UserPoolId")
        .required()
        .with_description("The ID of the user pool where the group is created"),
    FieldDescriptor::string("Description").with_description("A description of the group"),
    FieldDescriptor::string("RoleArn")
        .with_description("ARN of the IAM role associated with the group"),
    FieldDescriptor::integer("Precedence")
        .with_description("Precedence relative to other groups; zero is highest"),
];

/// Input of `CreateGroup`.
pub static CREATE_GROUP_REQUEST: Shape =
    Shape::new("CreateGroupRequest", &CREATE_GROUP_REQUEST_FIELDS);

static ATTRIBUTE_TYPE_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::string("Name")
        .required()
        .with_description("The name of the attribute"),
    FieldDescriptor::string("Value").with_description("The value of the attribute"),
];

/// A user attribute name/value pair.
pub static ATTRIBUTE_TYPE: Shape = Shape::new("AttributeType", &ATTRIBUTE_TYPE_FIELDS);

static ADMIN_UPDATE_USER_ATTRIBUTES_REQUEST_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::string("UserPoolId").required(),
    FieldDescriptor::string("Username").required(),
    FieldDescriptor::list("UserAttributes", Element::Object(&ATTRIBUTE_TYPE))
        .required()
        .with_description("Attributes to update, in order"),
];

/// Input of `AdminUpdateUserAttributes`.
pub static ADMIN_UPDATE_USER_ATTRIBUTES_REQUEST: Shape = Shape::new(
    "AdminUpdateUserAttributesRequest",
    &ADMIN_UPDATE_USER_ATTRIBUTES_REQUEST_FIELDS,
);
