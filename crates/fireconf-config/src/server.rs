use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::env::{EnvSource, ProcessEnv};
use crate::keys;

pub const DEFAULT_PORT: u16 = 8788;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnv)
    }

    /// Unparseable values fall back to the defaults.
    pub fn from_source(env: &dyn EnvSource) -> Self {
        let defaults = Self::default();

        Self {
            host: env
                .get(keys::HOST)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.host),
            port: env
                .get(keys::PORT)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_source(&MapEnv::new());
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:8788");
    }

    #[test]
    fn test_custom_host_and_port() {
        let env = MapEnv::new().with(keys::HOST, "127.0.0.1").with(keys::PORT, "3000");
        let config = ServerConfig::from_source(&env);
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let env = MapEnv::new().with(keys::HOST, "not-an-ip").with(keys::PORT, "99999");
        let config = ServerConfig::from_source(&env);
        assert_eq!(config, ServerConfig::default());
    }
}
