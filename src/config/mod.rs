use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::IpAddr;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.zoom.us/v2";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub zoom: ZoomConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomConfig {
    pub base_url: Url,
    pub token_ttl_secs: u64,
    pub request_timeout_secs: Option<u64>,
    pub production: Credentials,
    pub development: Credentials,
}

/// Issuer key and signing secret for one deployment mode.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub enable_ip_filter: bool,
    pub ip_allowlist: Vec<IpAddr>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Zoom overrides
        if let Ok(v) = env::var("ZOOM_API_BASE_URL") {
            match Url::parse(&v) {
                Ok(url) => self.zoom.base_url = url,
                Err(e) => tracing::warn!("Ignoring ZOOM_API_BASE_URL '{}': {}", v, e),
            }
        }
        if let Ok(v) = env::var("ZOOM_TOKEN_TTL_SECS") {
            self.zoom.token_ttl_secs = v.parse().unwrap_or(self.zoom.token_ttl_secs);
        }
        if let Ok(v) = env::var("ZOOM_REQUEST_TIMEOUT_SECS") {
            self.zoom.request_timeout_secs = v.parse().ok();
        }
        if let Ok(v) = env::var("ZOOM_API_KEY") {
            self.zoom.production.api_key = v;
        }
        if let Ok(v) = env::var("ZOOM_API_SECRET") {
            self.zoom.production.api_secret = v;
        }
        if let Ok(v) = env::var("ZOOM_DEV_API_KEY") {
            self.zoom.development.api_key = v;
        }
        if let Ok(v) = env::var("ZOOM_DEV_API_SECRET") {
            self.zoom.development.api_secret = v;
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_ENABLE_IP_FILTER") {
            self.security.enable_ip_filter = v.parse().unwrap_or(self.security.enable_ip_filter);
        }
        if let Ok(v) = env::var("SECURITY_IP_ALLOWLIST") {
            self.security.ip_allowlist = parse_ip_list(&v);
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            zoom: ZoomConfig::default(),
            security: SecurityConfig {
                enable_cors: true,
                enable_ip_filter: false,
                ip_allowlist: vec![],
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            zoom: ZoomConfig::default(),
            security: SecurityConfig {
                enable_cors: true,
                enable_ip_filter: true,
                ip_allowlist: vec![],
            },
        }
    }

    /// The credential pair selected by the deployment mode.
    pub fn credentials(&self) -> &Credentials {
        match self.environment {
            Environment::Production => &self.zoom.production,
            Environment::Development => &self.zoom.development,
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_ttl_secs: 4,
            request_timeout_secs: None,
            production: Credentials::default(),
            development: Credentials::default(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

fn parse_ip_list(raw: &str) -> Vec<IpAddr> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<IpAddr>() {
            Ok(ip) => Some(ip),
            Err(_) => {
                tracing::warn!("Skipping invalid allow-list entry '{}'", s);
                None
            }
        })
        .collect()
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}
