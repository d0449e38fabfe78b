//! Convenient re-exports for writing operation tables.
//!
//! ```
//! use marshal_define::prelude::*;
//!
//! static FIELDS: [FieldDescriptor; 1] = [FieldDescriptor::string("Name").required()];
//! static INPUT: Shape = Shape::new("NameOnly", &FIELDS);
//! assert_eq!(INPUT.fields[0].location, Location::Body);
//! ```

pub use crate::error::SpecError;
pub use crate::field::{Element, FieldDescriptor, FieldType, Location, LocationKind, Shape};
pub use crate::method::RestMethod;
pub use crate::operation::{BodyEncoding, OperationSpec};
