use crate::{
    abstract_trait::session::DynSessionStore,
    cache::session::SessionContext,
    config::{Config, SessionBackend},
    di::DependenciesInject,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynKeyValueStore,
    cache::{FileStore, MemoryStore, RedisStore},
    config::RedisClient,
    utils::{Metrics, encode_metrics},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub session: DynSessionStore,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Metrics,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("session", &self.session)
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let store = Self::build_store(config).await?;
        Self::with_store(config, store)
    }

    /// Wires everything over an already-built backend.
    pub fn with_store(config: &Config, store: DynKeyValueStore) -> Result<Self> {
        let session: DynSessionStore = Arc::new(SessionContext::new(store));

        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry);

        let di_container = DependenciesInject::new(&config.api_url, session.clone(), metrics.clone())
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            session,
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            metrics,
        })
    }

    async fn build_store(config: &Config) -> Result<DynKeyValueStore> {
        let store: DynKeyValueStore = match &config.session_backend {
            SessionBackend::Memory => {
                info!("Using in-memory session store");
                Arc::new(MemoryStore::new())
            }
            SessionBackend::File(path) => {
                info!("Using file session store at {}", path.display());
                Arc::new(FileStore::new(path.clone()))
            }
            SessionBackend::Redis => {
                info!("Initializing Redis connection for the session store");
                let redis =
                    RedisClient::new(&config.redis).context("Failed to connect to Redis")?;
                redis.ping().await.context("Failed to ping Redis server")?;

                let ttl = config.session_ttl_hours.map(chrono::Duration::hours);
                Arc::new(RedisStore::new(
                    redis.pool,
                    config.session_key_prefix.clone(),
                    ttl,
                ))
            }
        };

        Ok(store)
    }

    pub async fn render_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        encode_metrics(&registry)
    }
}
