//! reqwest transport implementation.

use log::{debug, trace};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use url::Url;

use super::{DEFAULT_BASE_URL, Headers, Response, Transport, TransportError};

/// reqwest-based HTTP transport.
///
/// Resource paths are joined onto the base URL, so the base URL must end with
/// a `/` (one is appended when missing).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Transport for the public LIFX API.
    pub fn new() -> Self {
        ReqwestTransport {
            http: reqwest::Client::new(),
            base_url: default_base_url(),
        }
    }

    /// Transport for a custom base URL (e.g. a proxy or a mock server).
    pub fn with_base_url(base_url: &str) -> Result<Self, TransportError> {
        Self::from_reqwest(reqwest::Client::new(), base_url)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(http: reqwest::Client, base_url: &str) -> Result<Self, TransportError> {
        Ok(ReqwestTransport {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::InvalidUrl {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: &Headers,
    ) -> Result<Response, TransportError> {
        let url = self.url(path)?;
        debug!("{method} {url}");

        let mut request = apply_headers(self.http.request(method, url), headers)?;
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await.map_err(TransportError::request)?;
        let response = read_response(resp).await?;
        trace!("response status {}", response.status());

        if response.is_success() {
            Ok(response)
        } else {
            Err(TransportError::Status(response))
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, path: &str, headers: &Headers) -> Result<Response, TransportError> {
        self.send(Method::GET, path, None, headers).await
    }

    async fn put(
        &self,
        path: &str,
        body: &Value,
        headers: &Headers,
    ) -> Result<Response, TransportError> {
        self.send(Method::PUT, path, Some(body), headers).await
    }

    async fn post(
        &self,
        path: &str,
        body: &Value,
        headers: &Headers,
    ) -> Result<Response, TransportError> {
        self.send(Method::POST, path, Some(body), headers).await
    }
}

fn default_base_url() -> Url {
    match Url::parse(DEFAULT_BASE_URL) {
        Ok(url) => url,
        Err(e) => unreachable!("default base url is valid: {e}"),
    }
}

fn normalize_base_url(raw: &str) -> Result<Url, TransportError> {
    let mut url = Url::parse(raw).map_err(|e| TransportError::InvalidUrl {
        path: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn apply_headers(
    mut request: RequestBuilder,
    headers: &Headers,
) -> Result<RequestBuilder, TransportError> {
    for (name, value) in headers.iter() {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(TransportError::request)?;
        let mut value = HeaderValue::from_str(value).map_err(TransportError::request)?;
        if name == reqwest::header::AUTHORIZATION {
            value.set_sensitive(true);
        }
        request = request.header(name, value);
    }
    Ok(request)
}

async fn read_response(resp: reqwest::Response) -> Result<Response, TransportError> {
    let status = resp.status().as_u16();
    let headers = resp
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = resp.bytes().await.map_err(TransportError::request)?;
    Ok(Response::new(status, headers, body.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let transport = ReqwestTransport::new();
        assert_eq!(transport.base_url().as_str(), "https://api.lifx.com/v1/");
        assert_eq!(
            transport.url("lights/all/state").unwrap().as_str(),
            "https://api.lifx.com/v1/lights/all/state"
        );
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let transport = ReqwestTransport::with_base_url("http://127.0.0.1:8080/v1").unwrap();
        assert_eq!(transport.base_url().as_str(), "http://127.0.0.1:8080/v1/");
        assert_eq!(
            transport.url("scenes").unwrap().as_str(),
            "http://127.0.0.1:8080/v1/scenes"
        );
    }

    #[test]
    fn test_selector_with_colon_stays_relative() {
        let transport = ReqwestTransport::new();
        assert_eq!(
            transport.url("lights/group_id:123/toggle").unwrap().as_str(),
            "https://api.lifx.com/v1/lights/group_id:123/toggle"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ReqwestTransport::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }
}
