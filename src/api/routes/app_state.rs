//! Application state management.
//!
//! Defines the AppState struct that holds the repositories shared by all
//! route handlers.

use crate::config::ApiConfig;
use crate::models::{Employee, Role};
use crate::storage::{
    InMemoryRepository, PostgresRepository, Repository, StorageError, fake_data, seed_if_empty,
};
use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

/// Application state shared across all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Employee repository
    pub employees: Arc<dyn Repository<Employee>>,
    /// Role repository
    pub roles: Arc<dyn Repository<Role>>,
    /// PostgreSQL database connection pool (optional)
    pub database: Option<PgPool>,
}

impl AppState {
    /// Create application state over empty in-memory repositories.
    pub fn new() -> Self {
        Self::with_repositories(
            Arc::new(InMemoryRepository::<Employee>::new()),
            Arc::new(InMemoryRepository::<Role>::new()),
        )
    }

    /// Create application state over the given repositories.
    pub fn with_repositories(
        employees: Arc<dyn Repository<Employee>>,
        roles: Arc<dyn Repository<Role>>,
    ) -> Self {
        Self {
            employees,
            roles,
            database: None,
        }
    }

    /// Initialize storage from configuration.
    ///
    /// Connects to PostgreSQL and runs migrations if a database URL is
    /// configured, otherwise keeps the in-memory repositories. Seeds fake data
    /// into empty repositories when enabled.
    pub async fn init_storage(&mut self, config: &ApiConfig) -> Result<(), StorageError> {
        if let Some(database_url) = config.database_url.as_deref() {
            let pool = sqlx::PgPool::connect(database_url).await.map_err(|e| {
                StorageError::ConnectionError(format!("Failed to connect to database: {}", e))
            })?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| StorageError::ConnectionError(format!("Migration failed: {}", e)))?;

            self.employees = Arc::new(PostgresRepository::<Employee>::new(pool.clone()));
            self.roles = Arc::new(PostgresRepository::<Role>::new(pool.clone()));
            self.database = Some(pool);
        }

        if config.seed_fake_data {
            let roles = seed_if_empty(&*self.roles, fake_data::roles()).await?;
            let employees = seed_if_empty(&*self.employees, fake_data::employees()).await?;
            info!("Seeded {} roles and {} employees", roles, employees);
        }

        Ok(())
    }

    /// Check if PostgreSQL storage is enabled
    pub fn is_postgres(&self) -> bool {
        self.database.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Allow repositories to be extracted from the state (for Axum)
impl FromRef<AppState> for Arc<dyn Repository<Employee>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.employees.clone()
    }
}

impl FromRef<AppState> for Arc<dyn Repository<Role>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.roles.clone()
    }
}
