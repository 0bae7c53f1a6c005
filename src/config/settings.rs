//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    APP_ENV_PRODUCTION, DEFAULT_APP_ENV, DEFAULT_DB_DATABASE, DEFAULT_DB_HOST,
    DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT, DEFAULT_DB_USERNAME, DEFAULT_NOTIFICATION_FROM,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub app_env: String,
    /// Create the `users` table from the entity definition on connect
    pub db_synchronize: bool,
    pub server_host: String,
    pub server_port: u16,
    pub notification_from: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("app_env", &self.app_env)
            .field("db_synchronize", &self.db_synchronize)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("notification_from", &self.notification_from)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.to_string());

        let db_synchronize = env::var("DB_SYNCHRONIZE")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(app_env != APP_ENV_PRODUCTION);

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| database_url_from_parts()),
            app_env,
            db_synchronize,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            notification_from: env::var("NOTIFICATION_FROM")
                .unwrap_or_else(|_| DEFAULT_NOTIFICATION_FROM.to_string()),
        }
    }

    /// Configuration for an arbitrary database URL with every other value at
    /// its default. Used by tests and tooling.
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            app_env: DEFAULT_APP_ENV.to_string(),
            db_synchronize: true,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            notification_from: DEFAULT_NOTIFICATION_FROM.to_string(),
        }
    }

    /// Whether the application runs with production settings.
    pub fn is_production(&self) -> bool {
        self.app_env == APP_ENV_PRODUCTION
    }
}

/// Build a Postgres URL from the individual `DB_*` variables.
fn database_url_from_parts() -> String {
    let host = env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string());
    let port = env::var("DB_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_DB_PORT);
    let username = env::var("DB_USERNAME").unwrap_or_else(|_| DEFAULT_DB_USERNAME.to_string());
    let password = env::var("DB_PASSWORD").unwrap_or_else(|_| DEFAULT_DB_PASSWORD.to_string());
    let database = env::var("DB_DATABASE").unwrap_or_else(|_| DEFAULT_DB_DATABASE.to_string());

    format!("postgres://{username}:{password}@{host}:{port}/{database}")
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
