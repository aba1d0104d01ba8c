//! Content store adapters for the catalog.
//!
//! This crate provides implementations of
//! [`ContentRepository`](catalog_interface::ContentRepository):
//!
//! - [`InMemoryContentRepository`]: process-local store, optionally seeded
//!   from a JSON file. Always available.
//! - `PostgresContentRepository`: diesel-backed PostgreSQL store behind the
//!   `postgres` feature, with embedded migrations.
//!
//! # Example
//!
//! ```rust
//! use catalog_core::ContentInput;
//! use catalog_database::InMemoryContentRepository;
//! use catalog_interface::ContentRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = InMemoryContentRepository::new();
//! let created = repo.create_content(ContentInput::titled("Movie A")).await?;
//! assert!(created.is_some());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;
mod seed;

#[cfg(feature = "postgres")]
mod connection;
#[cfg(feature = "postgres")]
mod models;
#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "postgres")]
#[allow(missing_docs)]
pub mod schema;

pub use memory::InMemoryContentRepository;
pub use seed::load_seed_file;

#[cfg(feature = "postgres")]
pub use connection::{PgPool, create_pool, run_migrations};
#[cfg(feature = "postgres")]
pub use models::{ContentChangeset, ContentRow, NewContentRow};
#[cfg(feature = "postgres")]
pub use postgres::PostgresContentRepository;

#[cfg(feature = "postgres")]
use catalog_error::DatabaseError;

/// Result type for database operations.
#[cfg(feature = "postgres")]
pub type DatabaseResult<T> = Result<T, DatabaseError>;
