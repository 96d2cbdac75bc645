use fireconf_config::{AllowedHosts, EnvSource};
use tracing::{error, instrument, warn};

use crate::modules::firebase_config::model::{ConfigError, FirebaseConfig};

pub struct FirebaseConfigService;

impl FirebaseConfigService {
    /// Checks `host` against `ALLOWED_HOSTS` and, if it passes, builds the
    /// config from the `FIREBASE_*` values.
    ///
    /// Nothing besides `ALLOWED_HOSTS` is read for a disallowed host.
    #[instrument(skip(env))]
    pub fn resolve(env: &dyn EnvSource, host: &str) -> Result<FirebaseConfig, ConfigError> {
        let allowed_hosts = AllowedHosts::from_source(env);

        if !allowed_hosts.is_allowed(host) {
            warn!(
                host = %host,
                allowlist_empty = allowed_hosts.is_empty(),
                "Host not in allowlist"
            );
            return Err(ConfigError::HostNotAllowed {
                host: host.to_string(),
            });
        }

        let config = FirebaseConfig::from_source(env);

        let missing = config.missing_required();
        if !missing.is_empty() {
            error!(missing = ?missing, "Firebase environment is missing required values");
            return Err(ConfigError::MisconfiguredEnvironment { missing });
        }

        Ok(config)
    }
}
