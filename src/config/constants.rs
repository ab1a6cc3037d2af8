//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default session token lifetime in minutes (4 hours)
pub const DEFAULT_JWT_EXPIRE_MINUTES: i64 = 240;

/// Upper bound on the session token lifetime in minutes (10 years)
pub const MAX_JWT_EXPIRE_MINUTES: i64 = 10 * 365 * 24 * 60;

/// Recommended minimum signing secret length; shorter secrets only warn
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// The only capability label a session token may carry
pub const SCOPE_ADMIN: &str = "admin";

/// Cookie consulted for a session token when no Authorization header is sent
pub const TOKEN_COOKIE_NAME: &str = "token";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Wildcard entry in the CORS allow-list
pub const CORS_ALLOW_ANY: &str = "*";

// =============================================================================
// Database
// =============================================================================

/// Default database host when DATABASE_URL is not given
pub const DEFAULT_DB_HOST: &str = "db";

/// Default database port when DATABASE_URL is not given
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Default database name when DATABASE_URL is not given
pub const DEFAULT_DB_NAME: &str = "it_service";

/// Total time to keep retrying the initial database connection
pub const DB_CONNECT_MAX_WAIT_SECONDS: u64 = 60;

/// Pause between database connection attempts
pub const DB_CONNECT_RETRY_DELAY_SECONDS: u64 = 2;

// =============================================================================
// Content
// =============================================================================

/// Status assigned to newly submitted tickets
pub const TICKET_STATUS_OPEN: &str = "open";

// =============================================================================
// Uploads
// =============================================================================

/// Default directory uploaded assets are written to
pub const DEFAULT_UPLOAD_DIR: &str = "../web/frontend/src/assets";

/// Public URL prefix under which uploaded assets are served by the frontend
pub const UPLOAD_URL_PREFIX: &str = "/src/assets";

/// Maximum accepted upload request body (10 MiB)
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
