use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::error::ConfigError;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: Directory with sqlx migrations
///   (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("DATABASE_MIGRATIONS_PATH").ok(),
        )
    }

    fn from_vars(
        url: Option<String>,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = max_connections
            .map(|raw| {
                raw.parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or(ConfigError::Invalid {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value: raw,
                    })
            })
            .transpose()?;

        Ok(Self {
            url,
            max_connections,
            migrations_path: migrations_path
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Connects to the database and applies pending migrations.
///
/// # Errors
/// Returns error if the connection or a migration fails; the caller aborts startup.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let mut config = DatabaseConfig::new(settings.url.clone());
    if let Some(max) = settings.max_connections {
        config = config.with_max_connections(max);
    }

    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!(
        migrations = %settings.migrations_path,
        "database ready"
    );
    Ok(pool)
}
