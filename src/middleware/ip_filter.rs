use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::state::AppState;

/// Reject callers whose peer address is not allow-listed.
///
/// Only active when `security.enable_ip_filter` is set. Requests without a
/// known peer address are rejected as well.
pub async fn ip_filter_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let security = &state.config.security;
    if !security.enable_ip_filter {
        return next.run(request).await;
    }

    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| canonical(addr.ip()));

    match peer {
        Some(ip) if is_allowed(&security.ip_allowlist, ip) => next.run(request).await,
        Some(ip) => {
            tracing::warn!("Rejected request from {} to {}", ip, request.uri().path());
            ApiError::forbidden("Forbidden").into_response()
        }
        None => {
            tracing::warn!("Rejected request with unknown peer address to {}", request.uri().path());
            ApiError::forbidden("Forbidden").into_response()
        }
    }
}

fn is_allowed(allowlist: &[IpAddr], ip: IpAddr) -> bool {
    allowlist.iter().any(|allowed| canonical(*allowed) == ip)
}

// ::ffff:a.b.c.d and a.b.c.d are the same caller
fn canonical(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(ip),
        IpAddr::V4(_) => ip,
    }
}
