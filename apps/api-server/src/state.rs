//! Application state - shared across all handlers.

use std::collections::HashSet;
use std::sync::Arc;

use inkwell_core::ports::UserRepository;
use inkwell_core::services::{Blog, Repositories};
use inkwell_infra::InMemoryStore;

#[cfg(feature = "postgres")]
use inkwell_infra::DatabaseConnections;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: Blog,
    pub users: Arc<dyn UserRepository>,
    admins: Arc<HashSet<String>>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the state on the configured database, falling back to the
    /// in-memory store when none is configured or reachable.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        {
            match &config.database {
                Some(db_config) => match connect(db_config, config.run_migrations).await {
                    Ok(connections) => {
                        let mut state =
                            Self::build(connections.repositories(), &config.admin_usernames);
                        state.db = Some(Arc::new(connections));
                        tracing::info!("Application state initialized (postgres)");
                        return state;
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                },
                None => {
                    tracing::warn!(
                        "DATABASE_URL not set. Running without database (in-memory mode)."
                    );
                }
            }
        }

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory store");

        tracing::info!("Application state initialized (in-memory)");
        Self::in_memory(&config.admin_usernames)
    }

    /// State on a fresh in-memory store.
    pub fn in_memory(admin_usernames: &[String]) -> Self {
        Self::build(Arc::new(InMemoryStore::new()).repositories(), admin_usernames)
    }

    fn build(repos: Repositories, admin_usernames: &[String]) -> Self {
        Self {
            users: repos.users.clone(),
            blog: Blog::new(repos),
            admins: Arc::new(admin_usernames.iter().cloned().collect()),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Roles carried in the token issued to `username`.
    pub fn roles_for(&self, username: &str) -> Vec<String> {
        let mut roles = vec!["user".to_string()];
        if self.admins.contains(username) {
            roles.push("admin".to_string());
        }
        roles
    }

    /// Name of the backing store, reported by the health check.
    pub fn storage(&self) -> &'static str {
        #[cfg(feature = "postgres")]
        if self.db.is_some() {
            return "postgres";
        }
        "memory"
    }
}

#[cfg(feature = "postgres")]
async fn connect(
    config: &inkwell_infra::DatabaseConfig,
    run_migrations: bool,
) -> Result<DatabaseConnections, migration::DbErr> {
    use migration::{Migrator, MigratorTrait};

    let connections = DatabaseConnections::init(config).await?;
    if run_migrations {
        Migrator::up(connections.main.as_ref(), None).await?;
        tracing::info!("Migrations applied");
    }
    Ok(connections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_from_config() {
        let state = AppState::in_memory(&["ada".to_string()]);

        assert_eq!(state.roles_for("ada"), vec!["user", "admin"]);
        assert_eq!(state.roles_for("bob"), vec!["user"]);
        assert_eq!(state.storage(), "memory");
    }
}
