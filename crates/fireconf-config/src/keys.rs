//! Environment variable names.

/// Comma-separated list of host patterns allowed to fetch the config.
pub const ALLOWED_HOSTS: &str = "ALLOWED_HOSTS";

pub const FIREBASE_API_KEY: &str = "FIREBASE_API_KEY";
pub const FIREBASE_AUTH_DOMAIN: &str = "FIREBASE_AUTH_DOMAIN";
pub const FIREBASE_PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
pub const FIREBASE_STORAGE_BUCKET: &str = "FIREBASE_STORAGE_BUCKET";
pub const FIREBASE_MESSAGING_SENDER_ID: &str = "FIREBASE_MESSAGING_SENDER_ID";
pub const FIREBASE_APP_ID: &str = "FIREBASE_APP_ID";
pub const FIREBASE_MEASUREMENT_ID: &str = "FIREBASE_MEASUREMENT_ID";

pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const LOG_FORMAT: &str = "LOG_FORMAT";
pub const LOG_DIR: &str = "LOG_DIR";
