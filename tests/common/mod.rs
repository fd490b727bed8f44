#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

use zoom_api_gateway::{
    app,
    config::{AppConfig, Credentials},
    state::AppState,
};

/// One request as the mock remote API received it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct MockState {
    reply: Arc<Mutex<(StatusCode, String)>>,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

/// Stand-in for the remote API: records every call and answers with a canned reply.
pub struct MockUpstream {
    pub base_url: Url,
    state: MockState,
}

impl MockUpstream {
    pub async fn start() -> Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = MockState {
            reply: Arc::new(Mutex::new((StatusCode::OK, "{}".to_string()))),
            seen: Arc::new(Mutex::new(Vec::new())),
        };

        let router = Router::new().fallback(record).with_state(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url: Url::parse(&format!("http://{}/v2", addr))?,
            state,
        })
    }

    pub fn reply(&self, status: StatusCode, body: Value) {
        self.reply_raw(status, &body.to_string());
    }

    pub fn reply_raw(&self, status: StatusCode, body: &str) {
        *self.state.reply.lock().unwrap() = (status, body.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("remote API received no request")
    }
}

async fn record(State(state): State<MockState>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();
    let header_str = |name: header::HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let recorded = Recorded {
        method: parts.method.clone(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        authorization: header_str(header::AUTHORIZATION),
        content_type: header_str(header::CONTENT_TYPE),
        body: serde_json::from_slice(&bytes).ok(),
    };
    state.seen.lock().unwrap().push(recorded);

    let (status, body) = state.reply.lock().unwrap().clone();
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// A base URL on a port nothing listens on.
pub async fn unreachable_base_url() -> Result<Url> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(Url::parse(&format!("http://{}/v2", addr))?)
}

pub fn test_config(base_url: &Url) -> AppConfig {
    let mut config = AppConfig::development();
    config.zoom.base_url = base_url.clone();
    config.zoom.development = Credentials {
        api_key: "test-key".to_string(),
        api_secret: "test-secret".to_string(),
    };
    config
}

pub fn gateway_with(config: AppConfig) -> Result<(Router, AppState)> {
    let state = AppState::new(config).context("failed to build app state")?;
    Ok((app(state.clone()), state))
}

pub fn gateway(base_url: &Url) -> Result<(Router, AppState)> {
    gateway_with(test_config(base_url))
}

pub async fn call(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json))
}

pub fn request(method: Method, uri: &str, body: Option<Value>) -> Result<Request<Body>> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?,
        None => builder.body(Body::empty())?,
    };
    Ok(request)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
    call(app, request(method, uri, body)?).await
}

pub async fn send_from(app: &Router, peer: SocketAddr, method: Method, uri: &str) -> Result<(StatusCode, Value)> {
    let mut request = request(method, uri, None)?;
    request.extensions_mut().insert(ConnectInfo(peer));
    call(app, request).await
}

pub async fn login(app: &Router) -> Result<()> {
    let (status, _) = send(app, Method::POST, "/api/login", None).await?;
    anyhow::ensure!(status == StatusCode::OK, "login failed with {}", status);
    Ok(())
}
