//! Application configuration.

use serde::Deserialize;
use std::path::Path;
use url::Url;

use crate::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Content store configuration.
    pub store: StoreConfig,
    /// Public site configuration.
    #[serde(default)]
    pub site: SiteConfig,
    /// Admin panel configuration.
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

/// Which content store backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Hosted PostgREST-compatible REST endpoint.
    #[default]
    Rest,
    /// Direct `PostgreSQL` connection.
    Postgres,
    /// In-process tables, lost on restart.
    Memory,
}

/// Content store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Backend selection.
    #[serde(default)]
    pub backend: StoreBackend,
    /// Base URL of the hosted store (REST backend).
    #[serde(default)]
    pub url: Option<String>,
    /// Anonymous API key of the hosted store (REST backend).
    #[serde(default)]
    pub anon_key: Option<String>,
    /// `PostgreSQL` connection URL (Postgres backend).
    #[serde(default)]
    pub database_url: Option<String>,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Timeout for a single store request, in seconds.
    #[serde(default = "default_store_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Run schema migrations on startup (Postgres backend).
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

/// Public site configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Image shown when a stored image URL is missing or fails to load.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            placeholder_image_url: default_placeholder_image(),
        }
    }
}

/// Admin panel configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Bearer token required on admin routes. Unset leaves the panel open.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Upload limit for screens that enforce one, in bytes.
    #[serde(default = "default_upload_limit_bytes")]
    pub upload_limit_bytes: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            upload_limit_bytes: default_upload_limit_bytes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_body_limit_bytes() -> usize {
    32 * 1024 * 1024
}

const fn default_max_connections() -> u32 {
    10
}

const fn default_min_connections() -> u32 {
    1
}

const fn default_store_timeout_secs() -> u64 {
    15
}

const fn default_true() -> bool {
    true
}

const fn default_upload_limit_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_placeholder_image() -> String {
    "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?w=800".to_string()
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `.env` (if present) into the process environment
    /// 2. `config/default.toml`
    /// 3. `config/{environment}.toml` (based on `CHARITY_ENV`)
    /// 4. Environment variables with `CHARITY_` prefix
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let env = std::env::var("CHARITY_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CHARITY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("CHARITY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the connection parameters for the selected backend are present.
    pub fn validate(&self) -> AppResult<()> {
        match self.store.backend {
            StoreBackend::Rest => {
                let url = non_blank(self.store.url.as_deref())
                    .ok_or_else(|| AppError::Config("store.url is required".to_string()))?;
                Url::parse(url)
                    .map_err(|e| AppError::Config(format!("store.url is invalid: {e}")))?;
                non_blank(self.store.anon_key.as_deref())
                    .ok_or_else(|| AppError::Config("store.anon_key is required".to_string()))?;
            }
            StoreBackend::Postgres => {
                non_blank(self.store.database_url.as_deref()).ok_or_else(|| {
                    AppError::Config("store.database_url is required".to_string())
                })?;
            }
            StoreBackend::Memory => {}
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
