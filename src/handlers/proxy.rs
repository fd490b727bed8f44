// handlers/proxy.rs - generic credential-injecting relay

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::remote::RemoteError;
use crate::routes::{RouteDescriptor, Verb};
use crate::state::AppState;

/// Serve one descriptor: resolve parameters, make exactly one remote call,
/// then relay the body on success or translate the failure.
pub async fn proxy(
    route: &'static RouteDescriptor,
    State(state): State<AppState>,
    path: Option<Path<Vec<(String, String)>>>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let values = path.map(|Path(values)| values).unwrap_or_default();
    let names = route.param_names();
    if let Some(missing) = names.get(values.len()) {
        return Err(ApiError::bad_request(format!("Missing path parameter: {}", missing)));
    }

    let params: Vec<(&str, String)> = names
        .into_iter()
        .zip(values.into_iter().map(|(_, value)| value))
        .collect();
    let segments = route
        .remote_segments(&params)
        .map_err(|name| ApiError::bad_request(format!("Missing path parameter: {}", name)))?;
    let forwarded = forwarded_query(route, &query);

    let credential = state.issuer.current().await;
    match &credential {
        None => tracing::debug!("No credential issued yet; calling remote API without one"),
        Some(c) if c.is_expired() => tracing::debug!("Credential expired at {}; remote API decides", c.expires_at),
        Some(_) => {}
    }
    let credential = credential.as_ref();

    let remote = &state.remote;
    let outcome = match route.verb {
        Verb::Get => remote.get(segments, forwarded, credential).await,
        Verb::Delete => remote.delete(segments, forwarded, credential).await,
        Verb::Post => remote.post(segments, json_body(&body)?, credential).await,
        Verb::Patch => remote.patch(segments, json_body(&body)?, credential).await,
        Verb::Put => remote.put(segments, json_body(&body)?, credential).await,
    };

    outcome.map(Json).map_err(|err| {
        let message = route.failure_message(&params);
        match &err {
            RemoteError::Upstream { status, .. } => {
                tracing::warn!("{} {} failed upstream with {}", route.verb.method(), route.remote, status)
            }
            other => tracing::error!("{} {} failed: {}", route.verb.method(), route.remote, other),
        }
        ApiError::from_remote(&err, message)
    })
}

/// Fixed pairs first, then each declared parameter the caller actually sent.
fn forwarded_query(route: &RouteDescriptor, query: &HashMap<String, String>) -> Vec<(String, String)> {
    route
        .fixed_query
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .chain(
            route
                .query
                .iter()
                .filter_map(|name| query.get(*name).map(|value| (name.to_string(), value.clone()))),
        )
        .collect()
}

/// An absent body is sent as `{}`; anything else must already be JSON.
fn json_body(bytes: &Bytes) -> Result<Value, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(json!({}));
    }
    serde_json::from_slice(bytes).map_err(|e| ApiError::invalid_json(format!("Invalid JSON body: {}", e)))
}
