//! # fireconf Core
//!
//! Core types shared by the fireconf crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use fireconf_core::AppError;
//!
//! let error = AppError::forbidden(anyhow::anyhow!("Forbidden"));
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::AppError;
