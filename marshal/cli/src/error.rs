//! CLI error type.

use std::io;
use std::path::PathBuf;

use marshal::MarshalError;
use marshal::transport::TransportError;
use marshal_define::SpecError;
use thiserror::Error;

/// Errors surfaced by the `marshal` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown operation '{0}'. Run `marshal list` to see the registered operations")]
    UnknownOperation(String),

    #[error(transparent)]
    Marshal(#[from] MarshalError),

    #[error("Operation table is invalid: {0}")]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to read input from {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Request failed with HTTP status {0}")]
    HttpStatus(u16),
}
