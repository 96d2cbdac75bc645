use std::path::PathBuf;

use crate::env::{EnvSource, ProcessEnv};
use crate::keys;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    /// Anything other than `json` (case-insensitive) selects the compact format.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Compact
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level applied to this service's own targets when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
    /// When set, structured JSON logs are also written to daily files here.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            dir: None,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(env: &dyn EnvSource) -> Self {
        Self {
            level: env
                .get(keys::LOG_LEVEL)
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "info".to_string()),
            format: env
                .get(keys::LOG_FORMAT)
                .map(|s| LogFormat::parse(&s))
                .unwrap_or_default(),
            dir: env
                .get(keys::LOG_DIR)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
