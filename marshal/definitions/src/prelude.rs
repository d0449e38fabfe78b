//! Convenient re-exports of every operation table and lookup helper.
//!
//! ```
//! use marshal_definitions::prelude::*;
//!
//! assert_eq!(CREATE_GROUP.name, "CreateGroup");
//! assert_eq!(GRANTEE.name, "Grantee");
//! ```

pub use crate::cognito::{ADMIN_UPDATE_USER_ATTRIBUTES, ATTRIBUTE_TYPE, CREATE_GROUP};
pub use crate::s3::{
    ACCESS_CONTROL_POLICY, GET_OBJECT_ACL, GRANT, GRANTEE, OWNER, PUT_OBJECT_ACL,
};
pub use crate::stepfunctions::{SEND_TASK_FAILURE, SEND_TASK_HEARTBEAT, SEND_TASK_SUCCESS};
pub use crate::{find_operation, operations};
