use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::config::AppConfig;
use crate::remote::{RemoteClient, RemoteError};

/// Shared handler state. Cloning is cheap; everything inside is shared.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub issuer: TokenIssuer,
    pub remote: RemoteClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, RemoteError> {
        let remote = RemoteClient::new(&config.zoom)?;
        let issuer = TokenIssuer::new(config.credentials().clone(), config.zoom.token_ttl_secs);

        Ok(Self {
            config: Arc::new(config),
            issuer,
            remote,
        })
    }
}
