use anyhow::{Context, Result, anyhow};
use shared::config::{RedisConfig, env_flag, env_or, env_parse_or};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:4000/api";
pub const DEFAULT_SESSION_FILE: &str = ".storefront/session.json";
pub const DEFAULT_KEY_PREFIX: &str = "storefront:";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionBackend {
    Memory,
    File(PathBuf),
    Redis,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub session_backend: SessionBackend,
    pub redis: RedisConfig,
    pub session_ttl_hours: Option<i64>,
    pub session_key_prefix: String,
    pub is_dev: bool,
    pub enable_file_log: bool,
    pub otel_endpoint: Option<String>,
}

impl Config {
    pub fn init() -> Result<Self> {
        let api_url = env_or("STOREFRONT_API_URL", DEFAULT_API_URL);
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(anyhow!(
                "STOREFRONT_API_URL must be an http(s) URL, got '{api_url}'"
            ));
        }

        let session_backend = match env_or("SESSION_BACKEND", "file").as_str() {
            "memory" => SessionBackend::Memory,
            "file" => SessionBackend::File(PathBuf::from(env_or(
                "SESSION_FILE",
                DEFAULT_SESSION_FILE,
            ))),
            "redis" => SessionBackend::Redis,
            other => {
                return Err(anyhow!(
                    "SESSION_BACKEND must be 'memory', 'file' or 'redis', got '{other}'"
                ));
            }
        };

        let redis = RedisConfig::new(
            env_or("REDIS_HOST", "localhost"),
            env_parse_or("REDIS_PORT", 6379u16).context("Invalid REDIS_PORT")?,
            env_parse_or("REDIS_DB", 0u8).context("Invalid REDIS_DB")?,
            std::env::var("REDIS_PASSWORD").ok().filter(|pw| !pw.is_empty()),
        );

        let session_ttl_hours = match std::env::var("SESSION_TTL_HOURS") {
            Ok(raw) => {
                let hours = raw
                    .parse::<i64>()
                    .with_context(|| format!("SESSION_TTL_HOURS has an invalid value: '{raw}'"))?;
                (hours > 0).then_some(hours)
            }
            Err(_) => None,
        };

        Ok(Self {
            api_url,
            session_backend,
            redis,
            session_ttl_hours,
            session_key_prefix: env_or("SESSION_KEY_PREFIX", DEFAULT_KEY_PREFIX),
            is_dev: env_flag("DEV_MODE"),
            enable_file_log: env_flag("ENABLE_FILE_LOG"),
            otel_endpoint: std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .ok()
                .filter(|endpoint| !endpoint.is_empty()),
        })
    }

    /// Defaults with an in-memory session; what tests and one-off tools use.
    pub fn in_memory(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            session_backend: SessionBackend::Memory,
            redis: RedisConfig::new("localhost".into(), 6379, 0, None),
            session_ttl_hours: None,
            session_key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            is_dev: true,
            enable_file_log: false,
            otel_endpoint: None,
        }
    }
}
