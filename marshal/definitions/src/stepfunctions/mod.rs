//! AWS Step Functions task-token callbacks.
//!
//! Step Functions uses the AWS JSON 1.0 protocol. Its input members are
//! camelCase, unlike most AWS JSON services.

use marshal_define::{BodyEncoding, FieldDescriptor, OperationSpec, RestMethod, Shape};

/// Service name shared by every Step Functions operation.
pub const SERVICE: &str = "StepFunctions";

static SEND_TASK_FAILURE_INPUT_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::string("taskToken")
        .required()
        .with_description("The token that represents this task"),
    FieldDescriptor::string("error").with_description("The error code of the failure"),
    FieldDescriptor::string("cause").with_description("A more detailed explanation of the cause"),
];

/// Input of `SendTaskFailure`.
pub static SEND_TASK_FAILURE_INPUT: Shape =
    Shape::new("SendTaskFailureInput", &SEND_TASK_FAILURE_INPUT_FIELDS);

static SEND_TASK_SUCCESS_INPUT_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::string("taskToken").required(),
    FieldDescriptor::string("output")
        .required()
        .with_description("The JSON output of the task"),
];

/// Input of `SendTaskSuccess`.
pub static SEND_TASK_SUCCESS_INPUT: Shape =
    Shape::new("SendTaskSuccessInput", &SEND_TASK_SUCCESS_INPUT_FIELDS);

static SEND_TASK_HEARTBEAT_INPUT_FIELDS: [FieldDescriptor; 1] =
    [FieldDescriptor::string("taskToken").required()];

/// Input of `SendTaskHeartbeat`.
pub static SEND_TASK_HEARTBEAT_INPUT: Shape =
    Shape::new("SendTaskHeartbeatInput", &SEND_TASK_HEARTBEAT_INPUT_FIELDS);

/// Reports that the task identified by `taskToken` failed.
pub static SEND_TASK_FAILURE: OperationSpec = OperationSpec {
    service: SERVICE,
    name: "SendTaskFailure",
    description: "Reports that the task identified by the task token failed",
    method: RestMethod::Post,
    path: "/",
    headers: &[
        ("Content-Type", "application/x-amz-json-1.0"),
        ("X-Amz-Target", "AWSStepFunctions.SendTaskFailure"),
        ("Accept", "application/json"),
    ],
    query: &[],
    encoding: BodyEncoding::Json,
    input: &SEND_TASK_FAILURE_INPUT,
};

/// Reports that the task identified by `taskToken` completed.
pub static SEND_TASK_SUCCESS: OperationSpec = OperationSpec {
    service: SERVICE,
    name: "SendTaskSuccess",
    description: "Reports that the task identified by the task token completed successfully",
    method: RestMethod::Post,
    path: "/",
    headers: &[
        ("Content-Type", "application/x-amz-json-1.0"),
        ("X-Amz-Target", "AWSStepFunctions.SendTaskSuccess"),
        ("Accept", "application/json"),
    ],
    query: &[],
    encoding: BodyEncoding::Json,
    input: &SEND_TASK_SUCCESS_INPUT,
};

/// Reports that the task identified by `taskToken` is still making progress.
pub static SEND_TASK_HEARTBEAT: OperationSpec = OperationSpec {
    service: SERVICE,
    name: "SendTaskHeartbeat",
    description: "Reports that the task identified by the task token is still making progress",
    method: RestMethod::Post,
    path: "/",
    headers: &[
        ("Content-Type", "application/x-amz-json-1.0"),
        ("X-Amz-Target", "AWSStepFunctions.SendTaskHeartbeat"),
        ("Accept", "application/json"),
    ],
    query: &[],
    encoding: BodyEncoding::Json,
    input: &SEND_TASK_HEARTBEAT_INPUT,
};
