//! Database connection and initialization.

use std::time::{Duration, Instant};

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::{Config, DB_CONNECT_MAX_WAIT_SECONDS, DB_CONNECT_RETRY_DELAY_SECONDS};

pub mod migrations;

pub use migrations::Migrator;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect and run pending migrations, retrying while the database comes up.
    ///
    /// Gives up with the last error once the retry window has elapsed.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let started = Instant::now();
        let max_wait = Duration::from_secs(DB_CONNECT_MAX_WAIT_SECONDS);
        let delay = Duration::from_secs(DB_CONNECT_RETRY_DELAY_SECONDS);

        loop {
            match Self::connect_and_migrate(config).await {
                Ok(db) => {
                    tracing::info!("Database connected and migrations applied");
                    return Ok(db);
                }
                Err(e) if started.elapsed() < max_wait => {
                    tracing::warn!("Database not ready ({}), retrying in {:?}", e, delay);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    tracing::error!("Database unavailable after {:?}: {}", max_wait, e);
                    return Err(e);
                }
            }
        }
    }

    async fn connect_and_migrate(config: &Config) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;
        db.run_migrations().await?;
        Ok(db)
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::{seaql_migrations, MigrationName};

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        let migrations: Vec<(String, bool)> = Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }
}
