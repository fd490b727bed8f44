use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Credentials;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: Uuid,
}

impl Claims {
    pub fn new(issuer: String, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            iss: issuer,
            exp: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
    #[error("Invalid JWT secret")]
    InvalidSecret,
}

pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// A signed bearer token and the moment the remote API stops accepting it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Issues short-lived tokens and remembers the most recent one.
///
/// Starts unauthenticated. Every successful `issue` replaces the stored
/// credential; nothing ever clears it, and expiry is left to the remote API.
#[derive(Clone, Debug)]
pub struct TokenIssuer {
    credentials: Credentials,
    ttl: Duration,
    current: Arc<RwLock<Option<Credential>>>,
}

impl TokenIssuer {
    pub fn new(credentials: Credentials, ttl_secs: u64) -> Self {
        Self {
            credentials,
            ttl: Duration::seconds(i64::try_from(ttl_secs).unwrap_or(i64::MAX).min(i64::MAX / 1000)),
            current: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn issue(&self) -> Result<Credential, JwtError> {
        let claims = Claims::new(self.credentials.api_key.clone(), self.ttl);
        let token = generate_jwt(&claims, &self.credentials.api_secret)?;
        if token.is_empty() {
            return Err(JwtError::TokenGeneration("empty token".to_string()));
        }

        let expires_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);
        let credential = Credential { token, expires_at };

        *self.current.write().await = Some(credential.clone());
        tracing::info!("Issued API token for issuer '{}', expires {}", claims.iss, expires_at);

        Ok(credential)
    }

    /// Snapshot of the active credential, if any login has happened yet.
    pub async fn current(&self) -> Option<Credential> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}
