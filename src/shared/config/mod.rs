//! Application configuration module
//!
//! Configuration is read from the environment (after `.env` is loaded by the
//! server binary). Tests build a configuration directly with
//! [`AppConfig::builder`].

use thiserror::Error;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_JWT_TTL_HOURS: i64 = 24;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// OAuth client settings for the external identity provider
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_url: String::new(),
            auth_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_url: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string
    pub database_url: String,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// Port the HTTP server binds to
    pub server_port: u16,
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    /// Session token lifetime
    pub jwt_ttl_hours: i64,
    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
    /// Identity provider settings
    pub oauth: OAuthConfig,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder()
            .database_url(required("DATABASE_URL")?)
            .jwt_secret(required("JWT_SECRET")?);

        if let Some(port) = optional("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT", port))?;
            builder = builder.server_port(port);
        }
        if let Some(ttl) = optional("JWT_TTL_HOURS") {
            let ttl = ttl
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidValue("JWT_TTL_HOURS", ttl))?;
            builder = builder.jwt_ttl_hours(ttl);
        }
        if let Some(max) = optional("DATABASE_MAX_CONNECTIONS") {
            let max = max
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS", max))?;
            builder = builder.max_connections(max);
        }
        if let Some(origins) = optional("ALLOWED_ORIGINS") {
            builder = builder.allowed_origins(parse_origins(&origins));
        }

        let oauth = OAuthConfig {
            client_id: optional("GOOGLE_CLIENT_ID").unwrap_or_default(),
            client_secret: optional("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            redirect_url: optional("GOOGLE_REDIRECT_URL").unwrap_or_default(),
            ..OAuthConfig::default()
        };

        builder.oauth(oauth).build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.jwt_secret.len() < 16 {
            return Err(ConfigError::InvalidValue(
                "JWT_SECRET",
                "must be at least 16 bytes".to_string(),
            ));
        }
        if self.jwt_ttl_hours <= 0 {
            return Err(ConfigError::InvalidValue(
                "JWT_TTL_HOURS",
                self.jwt_ttl_hours.to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "DATABASE_MAX_CONNECTIONS",
                "0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    max_connections: Option<u32>,
    server_port: Option<u16>,
    jwt_secret: Option<String>,
    jwt_ttl_hours: Option<i64>,
    allowed_origins: Vec<String>,
    oauth: Option<OAuthConfig>,
}

impl AppConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = Some(max);
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn jwt_ttl_hours(mut self, hours: i64) -> Self {
        self.jwt_ttl_hours = Some(hours);
        self
    }

    pub fn allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }

    pub fn oauth(mut self, oauth: OAuthConfig) -> Self {
        self.oauth = Some(oauth);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self
                .database_url
                .ok_or(ConfigError::MissingValue("DATABASE_URL"))?,
            max_connections: self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
            server_port: self.server_port.unwrap_or(DEFAULT_PORT),
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            jwt_ttl_hours: self.jwt_ttl_hours.unwrap_or(DEFAULT_JWT_TTL_HOURS),
            allowed_origins: self.allowed_origins,
            oauth: self.oauth.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::MissingValue(key))
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Split a comma-separated origin list
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
