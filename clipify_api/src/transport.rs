//! The HTTP seam between [`Client`](crate::Client) and the network.
//!
//! [`Client`](crate::Client) never talks to reqwest directly. It hands a URL
//! and a set of [`RequestOptions`] to a [`Transport`] and gets back a status
//! code and the raw body. [`ReqwestTransport`] is the production
//! implementation; tests plug in their own.

use std::fmt;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Per-request options forwarded to the transport.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method. Every public client operation uses `GET`.
    pub method: Method,
    /// Extra request headers, sent in order.
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    /// Adds a header to the request.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Overrides the HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }
}

/// A completed HTTP exchange: the status code and the unparsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// The request could not complete (DNS, connection, TLS, body read).
///
/// Wraps whatever error the transport produced so it reaches the caller
/// unchanged.
#[derive(Debug)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(error.into())
    }

    /// The underlying transport error.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e)
    }
}

/// Something that can perform one HTTP request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        (**self).send(url, options).await
    }
}

/// [`Transport`] backed by a shared `reqwest::Client`.
///
/// No timeout is set. Callers that need one build their own
/// `reqwest::Client` and pass it to [`ReqwestTransport::from_client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        let mut request = self.client.request(options.method.clone(), url);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let resp = request.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_2xx_only() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(TransportResponse::new(299, "").is_success());
        assert!(!TransportResponse::new(199, "").is_success());
        assert!(!TransportResponse::new(302, "").is_success());
        assert!(!TransportResponse::new(404, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }

    #[test]
    fn json_decodes_body() {
        let resp = TransportResponse::new(200, r#"{"success":true}"#);
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value, serde_json::json!({"success": true}));
    }

    #[test]
    fn json_fails_on_non_json_body() {
        let resp = TransportResponse::new(500, "Internal Server Error");
        assert!(resp.json::<serde_json::Value>().is_err());
    }

    #[test]
    fn default_options_are_plain_get() {
        let opts = RequestOptions::default();
        assert_eq!(opts.method, Method::GET);
        assert!(opts.headers.is_empty());

        let opts = opts
            .with_header("accept", "application/json")
            .with_method(Method::HEAD);
        assert_eq!(opts.method, Method::HEAD);
        assert_eq!(
            opts.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn transport_error_displays_inner_message() {
        let err = TransportError::new("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.inner().to_string(), "connection refused");
    }
}
