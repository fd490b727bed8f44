use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::routes::GROUPS;
use crate::state::AppState;

pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");
    let groups: Vec<String> = GROUPS.iter().map(|g| format!("/api/{}", g.prefix)).collect();

    Json(json!({
        "name": "Zoom API Gateway",
        "version": version,
        "endpoints": {
            "login": "/api/login",
            "groups": groups,
        }
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "authenticated": state.issuer.is_authenticated().await,
    }))
}
