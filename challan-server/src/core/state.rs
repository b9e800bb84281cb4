//! Shared application state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::jwt::JwtService;
use crate::core::config::Config;
use crate::db::DbService;
use crate::services::{LogNotifier, Notifier, RelayNotifier};

/// State shared by every handler through axum.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
    pub notifier: Arc<dyn Notifier>,
}

impl ServerState {
    /// Connect the database and assemble the state from configuration.
    pub async fn initialize(config: Config) -> Result<Self, sqlx::Error> {
        let db = DbService::connect(&config.database_path).await?;
        Ok(Self::assemble(config, db.pool().clone()))
    }

    /// Build state around an existing pool (tests use in-memory pools).
    pub fn assemble(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let notifier: Arc<dyn Notifier> = match &config.mail_relay_url {
            Some(url) => Arc::new(RelayNotifier::new(url.clone(), config.mail_from.clone())),
            None => Arc::new(LogNotifier),
        };

        Self {
            config: Arc::new(config),
            pool,
            jwt_service,
            notifier,
        }
    }
}
