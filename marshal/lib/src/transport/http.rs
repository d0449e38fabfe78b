//! `reqwest`-backed transport with tracing instrumentation.

use std::time::Duration;

use bytes::Bytes;
use marshal_define::RestMethod;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{Span, debug, instrument};
use url::Url;

use super::{Transport, TransportError};
use crate::wire::WireRequest;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn to_reqwest(method: RestMethod) -> reqwest::Method {
    match method {
        RestMethod::Get => reqwest::Method::GET,
        RestMethod::Post => reqwest::Method::POST,
        RestMethod::Put => reqwest::Method::PUT,
        RestMethod::Patch => reqwest::Method::PATCH,
        RestMethod::Delete => reqwest::Method::DELETE,
        RestMethod::Head => reqwest::Method::HEAD,
        RestMethod::Options => reqwest::Method::OPTIONS,
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), TransportError> {
    let invalid = |message: String| TransportError::InvalidHeader {
        name: name.to_string(),
        message,
    };
    let header_name = HeaderName::try_from(name).map_err(|e| invalid(e.to_string()))?;
    let header_value = HeaderValue::try_from(value).map_err(|e| invalid(e.to_string()))?;
    Ok((header_name, header_value))
}

/// Builder for configuring a [`ReqwestTransport`].
#[derive(Debug)]
pub struct ReqwestTransportBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
}

impl ReqwestTransportBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request. Request headers with the
    /// same name replace it.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError::InvalidHeader`] if the name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, TransportError> {
        let (name, value) = header_pair(name.as_ref(), value.as_ref())?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Builds the transport.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ReqwestTransport, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .build()?;

        Ok(ReqwestTransport {
            client,
            base_url: self.base_url,
        })
    }
}

/// Raw response of a sent request. The body is not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Looks up a response header ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Sends [`WireRequest`]s to a fixed endpoint.
///
/// ## Examples
///
/// ```rust,ignore
/// use marshal::OperationInput;
/// use marshal::transport::{ReqwestTransport, Transport};
/// use url::Url;
///
/// let transport = ReqwestTransport::builder(Url::parse("https://states.eu-west-1.amazonaws.com")?)
///     .build()?;
/// let request = OperationInput::new(&SEND_TASK_HEARTBEAT)
///     .with("taskToken", token)?
///     .render()?;
/// let response = transport.send(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn builder(base_url: Url) -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::new(base_url)
    }

    /// Creates a transport with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, TransportError> {
        Self::builder(base_url).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins the request target onto the base URL, keeping any base path.
    pub fn url_for(&self, request: &WireRequest) -> Result<Url, TransportError> {
        let url = format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            request.target()
        );
        Url::parse(&url).map_err(|source| TransportError::InvalidUrl { url, source })
    }
}

impl Transport for ReqwestTransport {
    type Response = TransportResponse;
    type Error = TransportError;

    #[instrument(
        name = "marshal_send",
        skip(self, request),
        fields(
            http.method = %request.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    async fn send(&self, request: WireRequest) -> Result<TransportResponse, TransportError> {
        let url = self.url_for(&request)?;
        Span::current().record("http.url", url.as_str());
        if let Some(region) = request.region() {
            debug!(region, "sending request");
        }

        let mut headers = HeaderMap::new();
        for (name, value) in request.headers() {
            let (name, value) = header_pair(name, value)?;
            headers.append(name, value);
        }

        let response = self
            .client
            .request(to_reqwest(request.method()), url)
            .headers(headers)
            .body(request.body().clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        Span::current().record("http.status_code", status);

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_mapping() {
        assert_eq!(to_reqwest(RestMethod::Put), reqwest::Method::PUT);
        assert_eq!(to_reqwest(RestMethod::Options), reqwest::Method::OPTIONS);
    }

    #[test]
    fn invalid_default_header_is_rejected() {
        let base = Url::parse("http://localhost").unwrap();
        let err = ReqwestTransport::builder(base)
            .default_header("bad header", "x")
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidHeader { .. }));
    }

    #[test]
    fn success_range() {
        let response = TransportResponse {
            status: 204,
            headers: vec![("X-Amzn-RequestId".to_string(), "r1".to_string())],
            body: Bytes::new(),
        };
        assert!(response.is_success());
        assert_eq!(response.header("x-amzn-requestid"), Some("r1"));
    }
}
