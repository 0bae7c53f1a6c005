//! Schema command - Database schema management.
//!
//! There are no migration files: tables are derived from the SeaORM
//! entity definitions.

use crate::cli::args::{SchemaAction, SchemaArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the schema command
pub async fn execute(args: SchemaArgs, config: Config) -> AppResult<()> {
    tracing::info!("Running schema command...");

    let db = Database::connect_without_sync(&config).await?;

    let outcome = run_action(&db, args.action).await;
    db.close().await?;
    outcome
}

async fn run_action(db: &Database, action: SchemaAction) -> AppResult<()> {
    match action {
        SchemaAction::Sync => {
            tracing::info!("Synchronizing schema...");
            db.sync_schema().await?;
            tracing::info!("Schema synchronized");
        }
        SchemaAction::Reset => {
            tracing::warn!("Dropping and recreating all tables...");
            db.reset_schema().await?;
            tracing::info!("Schema reset completed");
        }
        SchemaAction::Check => {
            db.ping().await?;
            println!("database: reachable");
        }
    }

    Ok(())
}
