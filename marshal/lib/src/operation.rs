//! Operation-bound inputs.

use std::ops::{Deref, DerefMut};

use marshal_define::OperationSpec;
use serde_json::Value as JsonValue;
use tracing::instrument;

use crate::error::MarshalError;
use crate::input::Input;
use crate::render;
use crate::value::Value;
use crate::wire::WireRequest;

/// Key of the optional region entry in an input mapping.
pub const REGION_KEY: &str = "@region";

/// An [`Input`] bound to the operation it will be rendered for.
///
/// Field access goes through `Deref` to the inner [`Input`].
///
/// ## Examples
///
/// ```
/// use marshal::OperationInput;
/// use marshal_definitions::stepfunctions::SEND_TASK_FAILURE;
/// use serde_json::json;
///
/// let input = OperationInput::from_json(&SEND_TASK_FAILURE, &json!({"taskToken": "abc123"}))?;
/// let request = input.render()?;
/// assert_eq!(request.body().as_ref(), br#"{"taskToken":"abc123"}"#);
/// assert_eq!(request.header("X-Amz-Target"), Some("AWSStepFunctions.SendTaskFailure"));
/// # Ok::<(), marshal::MarshalError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationInput {
    spec: &'static OperationSpec,
    input: Input,
    region: Option<String>,
}

impl OperationInput {
    /// Creates an input for `spec` with every field absent.
    pub fn new(spec: &'static OperationSpec) -> Self {
        Self {
            spec,
            input: Input::new(spec.input),
            region: None,
        }
    }

    /// Builds an input from a JSON object, honouring the `@region` key.
    ///
    /// ## Errors
    ///
    /// Returns [`MarshalError::InvalidArgument`] when the mapping is not an
    /// object, a field value has the wrong type, or `@region` is not a
    /// string.
    pub fn from_json(spec: &'static OperationSpec, mapping: &JsonValue) -> Result<Self, MarshalError> {
        let input = Input::from_json(spec.input, mapping)?;
        let region = match mapping.get(REGION_KEY) {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(region)) => Some(region.clone()),
            Some(_) => {
                return Err(MarshalError::invalid(
                    spec.input.name,
                    REGION_KEY,
                    "expected a string",
                ));
            }
        };
        Ok(Self { spec, input, region })
    }

    pub fn spec(&self) -> &'static OperationSpec {
        self.spec
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = Some(region.into());
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.set_region(region);
        self
    }

    /// Chaining form of [`Input::set`].
    ///
    /// ## Errors
    ///
    /// Same as [`Input::set`].
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self, MarshalError> {
        self.input.set(name, value)?;
        Ok(self)
    }

    /// Chaining form of [`Input::set_json`].
    ///
    /// ## Errors
    ///
    /// Same as [`Input::set`].
    pub fn with_json(mut self, name: &str, json: &JsonValue) -> Result<Self, MarshalError> {
        self.input.set_json(name, json)?;
        Ok(self)
    }

    pub fn into_input(self) -> Input {
        self.input
    }

    /// Renders the wire request.
    ///
    /// Rendering has no side effects; calling it again on an unchanged
    /// input yields an equal request.
    ///
    /// ## Errors
    ///
    /// Returns [`MarshalError::MissingRequiredField`] for the first required
    /// field without a value, including fields of nested objects.
    #[instrument(
        name = "marshal_render",
        skip(self),
        fields(
            operation = self.spec.name,
            service = self.spec.service,
            http.method = %self.spec.method,
        )
    )]
    pub fn render(&self) -> Result<WireRequest, MarshalError> {
        render::render(self.spec, &self.input, self.region.as_deref())
    }
}

impl Deref for OperationInput {
    type Target = Input;

    fn deref(&self) -> &Input {
        &self.input
    }
}

impl DerefMut for OperationInput {
    fn deref_mut(&mut self) -> &mut Input {
        &mut self.input
    }
}
