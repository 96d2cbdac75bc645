//! # fireconf Config
//!
//! Configuration types for the fireconf config responder.
//!
//! All configuration is read through an [`EnvSource`] so handlers and tests
//! can be given an explicit environment instead of the process one:
//!
//! - [`env`]: The [`EnvSource`] trait plus process-backed and map-backed sources
//! - [`keys`]: Names of the environment variables the responder reads
//! - [`allowed_hosts`]: `ALLOWED_HOSTS` parsing and host matching
//! - [`server`]: Listen address configuration
//! - [`logging`]: Log level, format and file output configuration
//!
//! # Example
//!
//! ```ignore
//! use fireconf_config::{AllowedHosts, MapEnv, ServerConfig};
//!
//! let env = MapEnv::new().with("ALLOWED_HOSTS", "redicat.me, *.pages.dev");
//! let allowed = AllowedHosts::from_source(&env);
//! assert!(allowed.is_allowed("preview.pages.dev"));
//!
//! let server = ServerConfig::from_env();
//! ```

pub mod allowed_hosts;
pub mod env;
pub mod keys;
pub mod logging;
pub mod server;

// Re-export commonly used types at crate root
pub use allowed_hosts::{AllowedHosts, HostPattern};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;
