//! Content store selection from configuration.

use crate::{StoreBackend, StoreSettings};
use catalog_database::{InMemoryContentRepository, load_seed_file};
use catalog_error::CatalogResult;
use catalog_interface::ContentRepository;
use std::sync::Arc;
use tracing::{info, instrument};

/// Build the repository named by `settings.backend`.
///
/// # Errors
///
/// Fails when the seed file cannot be loaded, the database is unreachable,
/// or the postgres backend is requested from a build without it.
#[instrument(skip(settings), fields(backend = ?settings.backend()))]
pub async fn build_repository(settings: &StoreSettings) -> CatalogResult<Arc<dyn ContentRepository>> {
    match settings.backend() {
        StoreBackend::Memory => memory_repository(settings).await,
        StoreBackend::Postgres => postgres_repository(settings).await,
    }
}

async fn memory_repository(settings: &StoreSettings) -> CatalogResult<Arc<dyn ContentRepository>> {
    let inputs = match settings.seed_file() {
        Some(path) => load_seed_file(path).await?,
        None => Vec::new(),
    };
    info!(seeded = inputs.len(), "Using in-memory content store");
    Ok(Arc::new(InMemoryContentRepository::with_inputs(inputs)))
}

#[cfg(feature = "postgres")]
async fn postgres_repository(settings: &StoreSettings) -> CatalogResult<Arc<dyn ContentRepository>> {
    use catalog_database::{PostgresContentRepository, create_pool, run_migrations};
    use catalog_error::{CatalogError, ConfigError, StoreError, StoreErrorKind};

    let database_url = match settings.database_url() {
        Some(url) => url.clone(),
        None => std::env::var("DATABASE_URL").map_err(|_| {
            CatalogError::from(ConfigError::new(
                "store.database_url is unset and DATABASE_URL is not defined",
            ))
        })?,
    };
    if settings.seed_file().is_some() {
        tracing::warn!("Seed file is ignored by the postgres store");
    }

    let pool_size = *settings.pool_size();
    let migrate = *settings.run_migrations();
    let pool = tokio::task::spawn_blocking(move || -> CatalogResult<_> {
        let pool = create_pool(&database_url, pool_size)?;
        if migrate {
            let mut conn = pool.get().map_err(catalog_error::DatabaseError::from)?;
            run_migrations(&mut conn)?;
        }
        Ok(pool)
    })
    .await
    .map_err(|e| {
        CatalogError::from(StoreError::new(StoreErrorKind::Unavailable(format!(
            "Database setup task failed: {}",
            e
        ))))
    })??;

    info!(pool_size, "Using PostgreSQL content store");
    Ok(Arc::new(PostgresContentRepository::new(pool)))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_repository(_settings: &StoreSettings) -> CatalogResult<Arc<dyn ContentRepository>> {
    use catalog_error::{CatalogError, ConfigError};

    Err(CatalogError::from(ConfigError::new(
        "The postgres store requires a build with the `postgres` feature",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogConfig;

    #[tokio::test]
    async fn memory_backend_starts_empty_without_seed() {
        let config = CatalogConfig::bundled().unwrap();
        let repository = build_repository(config.store()).await.unwrap();
        assert!(repository.get_many_contents().await.unwrap().is_empty());
    }

    #[cfg(not(feature = "postgres"))]
    #[tokio::test]
    async fn postgres_backend_needs_feature() {
        let config = CatalogConfig::bundled().unwrap();
        let store = config.store().clone().with_backend(StoreBackend::Postgres);
        let err = build_repository(&store).await.err().unwrap();
        assert!(err.to_string().contains("postgres"));
    }
}
