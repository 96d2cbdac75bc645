//! # fireconf
//!
//! An HTTP service that hands the Firebase web config to browser clients,
//! but only when the request was addressed to an allowlisted host.
//!
//! ## Overview
//!
//! A single endpoint, `/api/firebase-config`, answers every HTTP method:
//!
//! 1. The requested host is compared against `ALLOWED_HOSTS`. Exact entries
//!    match one host, `*.domain` entries match the domain and all of its
//!    subdomains. No match gives `403 Forbidden`.
//! 2. The seven `FIREBASE_*` values are copied into a JSON object. If any of
//!    the API key, auth domain, project ID or app ID is missing the response
//!    is `500 Misconfigured Firebase environment`.
//! 3. Otherwise the JSON is returned with caching disabled.
//!
//! The environment is injected through [`fireconf_config::EnvSource`] and
//! read on every request, so changes take effect without a restart.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── fireconf-core/      # AppError and its HTTP rendering
//! └── fireconf-config/    # EnvSource, ALLOWED_HOSTS matching, server/log config
//! src/
//! ├── middleware/         # RequestHost extractor
//! ├── modules/
//! │   └── firebase_config/
//! ├── logging.rs          # Request logging middleware, subscriber setup
//! ├── router.rs
//! └── state.rs
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! ALLOWED_HOSTS="redicat.me, *.pages.dev, redicat-a8376.web.app"
//! FIREBASE_API_KEY=...
//! FIREBASE_AUTH_DOMAIN=redicat-a8376.firebaseapp.com
//! FIREBASE_PROJECT_ID=redicat-a8376
//! FIREBASE_STORAGE_BUCKET=redicat-a8376.appspot.com
//! FIREBASE_MESSAGING_SENDER_ID=...
//! FIREBASE_APP_ID=...
//! FIREBASE_MEASUREMENT_ID=G-...
//! HOST=0.0.0.0
//! PORT=8788
//! LOG_LEVEL=info
//! LOG_FORMAT=compact
//! LOG_DIR=storage/logs
//! ```

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use fireconf_config;
pub use fireconf_core;
