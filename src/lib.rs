pub mod config;
pub mod db;
pub mod errors;
pub mod files;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use sqlx::PgPool;

use crate::files::FileUrlGenerator;
use crate::services::dashboard::DashboardService;
use crate::store::postgres::{PgContentStore, PgUserStore};
use crate::store::{ContentStore, UserStore};

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub users: Arc<dyn UserStore>,
    pub content: Arc<dyn ContentStore>,
}

impl AppState {
    pub fn new(
        config: config::AppConfig,
        users: Arc<dyn UserStore>,
        content: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            config,
            users,
            content,
        }
    }

    /// State backed by PostgreSQL for both users and content.
    pub fn postgres(pool: PgPool, config: config::AppConfig) -> Self {
        Self::new(
            config,
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgContentStore::new(pool)),
        )
    }

    /// Dashboard aggregator wired to this state's collaborators.
    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(
            Arc::clone(&self.users),
            Arc::clone(&self.content),
            FileUrlGenerator::new(&self.config.public_files_base_url),
            self.config.site_utc_offset,
        )
    }
}
