//! Outbound client for the Zoom REST API.
//!
//! A single `reqwest::Client` is built at startup and shared by every route.
//! The caller's credential is attached to each request individually; the
//! client's default headers never change after construction.

use std::time::Duration;

use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::auth::Credential;
use crate::config::ZoomConfig;

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The remote API answered with a non-2xx status.
    #[error("remote API responded with {status}")]
    Upstream { status: StatusCode, body: Value },

    /// The call never produced a response (connect failure, timeout, broken body).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid remote path: {0}")]
    InvalidPath(String),
}

/// One outbound call: verb, already-rendered path segments, query and body.
#[derive(Debug, Clone)]
pub struct RemoteRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RemoteRequest {
    pub fn new(method: Method, segments: Vec<String>) -> Self {
        Self {
            method,
            segments,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }
}

#[derive(Clone, Debug)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RemoteClient {
    pub fn new(config: &ZoomConfig) -> Result<Self, RemoteError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Append percent-encoded segments to the base URL.
    pub fn url_for(&self, segments: &[String]) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::InvalidPath(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get(
        &self,
        segments: Vec<String>,
        query: Vec<(String, String)>,
        credential: Option<&Credential>,
    ) -> Result<Value, RemoteError> {
        self.send(RemoteRequest::new(Method::GET, segments).query(query), credential)
            .await
    }

    pub async fn post(
        &self,
        segments: Vec<String>,
        body: Value,
        credential: Option<&Credential>,
    ) -> Result<Value, RemoteError> {
        self.send(RemoteRequest::new(Method::POST, segments).body(Some(body)), credential)
            .await
    }

    pub async fn patch(
        &self,
        segments: Vec<String>,
        body: Value,
        credential: Option<&Credential>,
    ) -> Result<Value, RemoteError> {
        self.send(RemoteRequest::new(Method::PATCH, segments).body(Some(body)), credential)
            .await
    }

    pub async fn put(
        &self,
        segments: Vec<String>,
        body: Value,
        credential: Option<&Credential>,
    ) -> Result<Value, RemoteError> {
        self.send(RemoteRequest::new(Method::PUT, segments).body(Some(body)), credential)
            .await
    }

    pub async fn delete(
        &self,
        segments: Vec<String>,
        query: Vec<(String, String)>,
        credential: Option<&Credential>,
    ) -> Result<Value, RemoteError> {
        self.send(RemoteRequest::new(Method::DELETE, segments).query(query), credential)
            .await
    }

    /// Perform one call and return the parsed 2xx body.
    pub async fn send(
        &self,
        request: RemoteRequest,
        credential: Option<&Credential>,
    ) -> Result<Value, RemoteError> {
        let url = self.url_for(&request.segments)?;
        tracing::debug!("{} {}", request.method, url.path());

        let mut builder = self.http.request(request.method, url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(credential) = credential {
            builder = builder.header(header::AUTHORIZATION, credential.authorization());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = parse_body(&bytes);

        if status.is_success() {
            Ok(body)
        } else {
            Err(RemoteError::Upstream { status, body })
        }
    }
}

/// Empty bodies become `null`; anything that is not JSON is kept as a string.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
