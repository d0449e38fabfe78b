//! The seam between rendering and the network.
//!
//! The marshaller never performs I/O. A [`Transport`] receives the finished
//! [`WireRequest`] and owns connection handling, timeouts and retries.
//! [`ReqwestTransport`] is a minimal adapter over `reqwest`.

mod error;
mod http;

pub use error::TransportError;
pub use http::{DEFAULT_TIMEOUT_SECS, ReqwestTransport, ReqwestTransportBuilder, TransportResponse};

use std::future::Future;

use crate::wire::WireRequest;

/// Sends rendered requests.
pub trait Transport {
    /// What a successful exchange yields.
    type Response;
    /// Transport-level failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends one request.
    fn send(
        &self,
        request: WireRequest,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send;
}
