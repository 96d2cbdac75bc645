//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`host`]: Extractor for the normalised host the client addressed
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::host::RequestHost;
//!
//! async fn handler(RequestHost(host): RequestHost) -> String {
//!     host
//! }
//! ```

pub mod host;
