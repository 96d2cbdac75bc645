use std::sync::Arc;

use fireconf_config::{EnvSource, ProcessEnv};

#[derive(Clone, Debug)]
pub struct AppState {
    /// Queried on every request; nothing derived from it is cached.
    pub env: Arc<dyn EnvSource>,
}

impl AppState {
    pub fn with_env<E>(env: E) -> Self
    where
        E: EnvSource + 'static,
    {
        Self { env: Arc::new(env) }
    }

    pub fn from_process_env() -> Self {
        Self::with_env(ProcessEnv)
    }
}
