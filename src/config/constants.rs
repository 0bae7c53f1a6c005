//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Environment
// =============================================================================

/// Default application environment
pub const DEFAULT_APP_ENV: &str = "development";

/// Environment name in which schema synchronization is off by default
pub const APP_ENV_PRODUCTION: &str = "production";

// =============================================================================
// Database
// =============================================================================

/// Default database host (used when DATABASE_URL is not set)
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default database port
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default database user
pub const DEFAULT_DB_USERNAME: &str = "postgres";

/// Default database password (for development)
pub const DEFAULT_DB_PASSWORD: &str = "password";

/// Default database name
pub const DEFAULT_DB_DATABASE: &str = "user_management";

// =============================================================================
// Notifications
// =============================================================================

/// Default sender address for outgoing emails
pub const DEFAULT_NOTIFICATION_FROM: &str = "noreply@example.com";

/// Subject line of the message sent after a user is created
pub const WELCOME_EMAIL_SUBJECT: &str = "Welcome";
