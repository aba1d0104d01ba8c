//! HTTP API server for the content catalog.
//!
//! Exposes create, read, update and delete over content records, plus
//! operations that add and remove genres on a single record.
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_database::InMemoryContentRepository;
//! use catalog_server::{ApiState, ContentService, create_router};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ContentService::new(Arc::new(InMemoryContentRepository::new()));
//! let app = create_router(ApiState::new(service));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:4000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod error;
mod observability;
mod service;
mod store;

pub use api::{ApiDoc, ApiState, OPENAPI_PATH, create_router};
pub use config::{CatalogConfig, LoggingSettings, ServerSettings, StoreBackend, StoreSettings};
pub use error::{ApiError, INTERNAL_ERROR_TITLE, ProblemDetails};
pub use observability::{ObservabilityConfig, init_observability};
pub use service::{ContentOutcome, ContentService};
pub use store::build_repository;

use catalog_error::{CatalogError, CatalogResult, HttpError};
use std::future::Future;
use tracing::info;

/// Build the configured store and serve the API until `shutdown` resolves.
///
/// # Errors
///
/// Fails when the store cannot be built, the address cannot be bound, or the
/// server stops with an I/O error.
pub async fn run_server(
    config: &CatalogConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> CatalogResult<()> {
    let repository = build_repository(config.store()).await?;
    let app = create_router(ApiState::new(ContentService::new(repository)));

    let address = config.server().bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        CatalogError::from(HttpError::new(format!("Failed to bind {}: {}", address, e)))
    })?;
    info!(%address, "Catalog API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| CatalogError::from(HttpError::new(format!("Server error: {}", e))))?;

    info!("Catalog API stopped");
    Ok(())
}
