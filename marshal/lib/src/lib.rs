//! Marshal
//!
//! A generic, schema-driven request marshaller. Operation tables from
//! `marshal-define` describe fields and rendering policy; this crate holds
//! field values in a single generic container and renders them into an
//! immutable [`WireRequest`] for a [`Transport`](transport::Transport).
//!
//! ## Core Types
//!
//! - [`Input`] - Field values of one shape, with typed accessors
//! - [`Value`] - A single field value
//! - [`OperationInput`] - An input bound to its operation; `render()` lives here
//! - [`WireRequest`] - Method, path, query, headers and body
//! - [`MarshalError`] - `InvalidArgument` and `MissingRequiredField`
//!
//! ## Examples
//!
//! ```
//! use marshal::{MarshalError, OperationInput};
//! use marshal_definitions::cognito::CREATE_GROUP;
//!
//! let input = OperationInput::new(&CREATE_GROUP).with("UserPoolId", "pool")?;
//! let err = input.render().unwrap_err();
//! assert!(matches!(err, MarshalError::MissingRequiredField { ref field, .. } if field == "GroupName"));
//!
//! let input = input.with("GroupName", "admins")?;
//! let request = input.render()?;
//! assert_eq!(request.path(), "/");
//! assert_eq!(request.body().as_ref(), br#"{"GroupName":"admins","UserPoolId":"pool"}"#);
//! # Ok::<(), MarshalError>(())
//! ```

mod coerce;
pub mod error;
pub mod input;
pub mod operation;
mod render;
pub mod transport;
pub mod value;
pub mod wire;

pub use error::MarshalError;
pub use input::Input;
pub use operation::{OperationInput, REGION_KEY};
pub use value::Value;
pub use wire::WireRequest;
