//! Error types for the content catalog.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use catalog_error::{CatalogResult, ConfigError};
//!
//! fn load() -> CatalogResult<String> {
//!     Err(ConfigError::new("missing [server] section"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod http;
mod store;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{CatalogError, CatalogErrorKind, CatalogResult};
pub use http::HttpError;
pub use store::{StoreError, StoreErrorKind};
