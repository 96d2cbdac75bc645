use fireconf_config::{EnvSource, keys};
use fireconf_core::AppError;
use serde::Serialize;
use thiserror::Error;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const NO_STORE_CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate, max-age=0";

/// Firebase web SDK initialisation values, serialised in the shape
/// `firebase.initializeApp` expects.
///
/// Values are copied verbatim from the environment. Unset values are left out
/// of the JSON; values set to an empty string are kept as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

impl FirebaseConfig {
    pub fn from_source(env: &dyn EnvSource) -> Self {
        Self {
            api_key: env.get(keys::FIREBASE_API_KEY),
            auth_domain: env.get(keys::FIREBASE_AUTH_DOMAIN),
            project_id: env.get(keys::FIREBASE_PROJECT_ID),
            storage_bucket: env.get(keys::FIREBASE_STORAGE_BUCKET),
            messaging_sender_id: env.get(keys::FIREBASE_MESSAGING_SENDER_ID),
            app_id: env.get(keys::FIREBASE_APP_ID),
            measurement_id: env.get(keys::FIREBASE_MEASUREMENT_ID),
        }
    }

    /// Environment keys of required values that are unset or empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            (keys::FIREBASE_API_KEY, &self.api_key),
            (keys::FIREBASE_AUTH_DOMAIN, &self.auth_domain),
            (keys::FIREBASE_PROJECT_ID, &self.project_id),
            (keys::FIREBASE_APP_ID, &self.app_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(key, _)| key)
        .collect()
    }
}

/// Why a config request was refused. The `Display` text is the response body,
/// so it never names the host or the missing keys.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Forbidden")]
    HostNotAllowed { host: String },
    #[error("Misconfigured Firebase environment")]
    MisconfiguredEnvironment { missing: Vec<&'static str> },
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::HostNotAllowed { .. } => AppError::forbidden(err),
            ConfigError::MisconfiguredEnvironment { .. } => AppError::internal(err),
        }
    }
}
