use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod remote;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the full router: login, the proxied route groups and global layers.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/login", post(handlers::login))
        .merge(routes::router())
        .layer(from_fn_with_state(state.clone(), middleware::ip_filter_middleware));

    let router = if state.config.security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
