//! Shared application state

use crate::{
    admin_auth::AdminGate,
    config::{Config, StorageBackend},
    db::{memory::seed_demo, DirectoryStore, InMemoryDirectoryStore, PostgresDirectoryStore},
    services::{
        DirectoryReviewVerifier, HospitalService, MetricsService, QnaService, ReviewService,
        VisitRequestService,
    },
    Result,
};
use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn DirectoryStore>,
    pub admin: AdminGate,
    pub hospitals: Arc<HospitalService>,
    pub visit_requests: Arc<VisitRequestService>,
    pub qna: Arc<QnaService>,
    pub reviews: Arc<ReviewService>,
    pub metrics_service: Arc<MetricsService>,
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Build state for the configured storage backend.
    pub async fn new(config: Config) -> Result<Self> {
        match config.storage.backend {
            StorageBackend::Postgres => {
                let pool = connect(&config).await?;
                let store = Arc::new(PostgresDirectoryStore::new(pool.clone()));
                Ok(Self::assemble(config, store, Some(pool)))
            }
            StorageBackend::Memory => {
                let store = InMemoryDirectoryStore::new();
                if config.storage.seed_demo_data {
                    seed_demo(&store).await?;
                }
                tracing::warn!("Using in-memory storage; data is lost on shutdown");
                Ok(Self::assemble(config, Arc::new(store), None))
            }
        }
    }

    /// Build state around an existing store.
    pub fn with_store(config: Config, store: Arc<dyn DirectoryStore>) -> Self {
        Self::assemble(config, store, None)
    }

    fn assemble(config: Config, store: Arc<dyn DirectoryStore>, db_pool: Option<PgPool>) -> Self {
        let verifier = Arc::new(DirectoryReviewVerifier::new(store.clone()));

        Self {
            admin: AdminGate::new(&config.auth),
            hospitals: Arc::new(HospitalService::new(store.clone())),
            visit_requests: Arc::new(VisitRequestService::new(store.clone())),
            qna: Arc::new(QnaService::new(store.clone())),
            reviews: Arc::new(ReviewService::new(store.clone(), verifier)),
            metrics_service: Arc::new(MetricsService::new(db_pool.clone())),
            config: Arc::new(config),
            store,
            db_pool,
        }
    }
}

async fn connect(config: &Config) -> Result<PgPool> {
    let db = &config.database;
    tracing::info!(
        max_connections = db.pool_max_size,
        min_connections = db.pool_min_size,
        "Connecting to PostgreSQL"
    );

    let pool = PgPoolOptions::new()
        .max_connections(db.pool_max_size)
        .min_connections(db.pool_min_size)
        .acquire_timeout(Duration::from_secs(db.pool_timeout_seconds))
        .connect(&db.url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    Ok(pool)
}
