// handlers/login.rs - POST /api/login

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// Issue a fresh token for the configured credential pair.
///
/// The token replaces whatever was issued before and is attached to every
/// later remote call. It is never returned to the caller.
pub async fn login(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    match state.issuer.issue().await {
        Ok(_) => Ok(Json(json!({ "message": "Authorized with Zoom App Credentials" }))),
        Err(e) => {
            tracing::error!("Token issuance failed: {}", e);
            Err(ApiError::internal_server_error("Error generating token"))
        }
    }
}
