//! Database connection and schema synchronization.

use sea_orm::sea_query::Table;
use sea_orm::{
    ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Schema, Statement,
};

use crate::config::Config;
use crate::infra::repositories::entities::UserEntity;

/// Database wrapper for connection management.
///
/// Acquired once at startup and released with [`Database::close`].
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool and, when enabled by configuration,
    /// create the `users` table from the entity definition.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        let db = Self { connection };

        if config.db_synchronize {
            if config.is_production() {
                tracing::warn!("Schema synchronization is enabled in production");
            }
            db.sync_schema().await?;
            tracing::info!("Database connected and schema synchronized");
        } else {
            tracing::info!("Database connected (schema synchronization disabled)");
        }

        Ok(db)
    }

    /// Connect without touching the schema (for CLI commands).
    pub async fn connect_without_sync(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Create missing tables from the entity definitions. Existing tables
    /// are left as they are.
    pub async fn sync_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let schema = Schema::new(backend);

        let mut create_users = schema.create_table_from_entity(UserEntity);
        create_users.if_not_exists();

        self.connection.execute(backend.build(&create_users)).await?;
        Ok(())
    }

    /// Drop every table and recreate it empty.
    pub async fn reset_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let drop_users = Table::drop().table(UserEntity).if_exists().to_owned();

        self.connection.execute(backend.build(&drop_users)).await?;
        tracing::warn!("Dropped users table");

        self.sync_schema().await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close the connection pool. Clones of this handle stop working.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}
