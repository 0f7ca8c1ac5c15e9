//! Pluggable HTTP transport.
//!
//! The client never talks to the network itself. Every request goes through a
//! [`Transport`], which resolves a resource path against its base URL, sends
//! the request, and hands back the raw [`Response`].
//!
//! # Feature Flags
//!
//! - `transport-reqwest` (default) - [`ReqwestTransport`], backed by reqwest
//!
//! With the feature disabled the crate carries no HTTP stack and callers
//! provide their own implementation:
//!
//! ```toml
//! [dependencies]
//! lifx-cloud-rs = { version = "0.1", default-features = false }
//! ```

use std::fmt;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::Error;

#[cfg(feature = "transport-reqwest")]
mod reqwest_impl;

#[cfg(feature = "transport-reqwest")]
pub use reqwest_impl::ReqwestTransport;

/// Base URL of the public LIFX HTTP API.
pub const DEFAULT_BASE_URL: &str = "https://api.lifx.com/v1/";

/// Trait for async HTTP transports.
///
/// Paths are relative to the transport's base URL (e.g. `lights/all/state`).
/// Each call sends exactly one request. Implementations must fail with
/// [`TransportError::Status`] when the response status is not a success.
pub trait Transport: Send + Sync {
    /// Send a GET request.
    fn get(
        &self,
        path: &str,
        headers: &Headers,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send;

    /// Send a PUT request with a JSON body.
    fn put(
        &self,
        path: &str,
        body: &Value,
        headers: &Headers,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send;

    /// Send a POST request with a JSON body.
    fn post(
        &self,
        path: &str,
        body: &Value,
        headers: &Headers,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send;
}

/// Errors raised by a [`Transport`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The API answered with a non-success status. The response is kept whole.
    #[error("request failed with status {}: {}", .0.status(), .0.text())]
    Status(Response),

    /// The resource path could not be resolved against the base URL.
    #[error("invalid url for path {path:?}: {reason}")]
    InvalidUrl { path: String, reason: String },

    /// The request could not be sent or its response could not be read.
    #[error("request error: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Create a new request error from any error source
    pub fn request<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        TransportError::Request(err.into())
    }
}

/// Request headers handed to a [`Transport`].
///
/// The `Debug` output hides the value of the `Authorization` header.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    /// Create an empty header list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header.
    pub fn insert(&mut self, name: &str, value: &str) {
        self.0.push((name.to_string(), value.to_string()));
    }

    /// Look up a header value (case-insensitive name match).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(n, v)| {
                if n.eq_ignore_ascii_case("authorization") {
                    (n.as_str(), "[REDACTED]")
                } else {
                    (n.as_str(), v.as_str())
                }
            }))
            .finish()
    }
}

/// A raw HTTP response from the LIFX API.
///
/// The client returns this exactly as the transport produced it. Decoding the
/// body is left to the caller; see [`Response::json`] and the types in
/// [`crate::models`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Response {
    /// Build a response from its status, headers and raw body.
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Response {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Look up a response header value (case-insensitive name match).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_cloud_rs::{ApiErrorBody, Response};
    ///
    /// let response = Response::new(401, Vec::new(), br#"{"error":"Invalid token"}"#.to_vec());
    /// let body: ApiErrorBody = response.json().unwrap();
    /// assert_eq!(body.error, "Invalid token");
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(Error::JsonLoad)
    }
}
