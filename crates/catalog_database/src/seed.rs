//! Seed data for the in-memory store.

use catalog_core::ContentInput;
use catalog_error::{CatalogResult, StoreError, StoreErrorKind};
use std::path::Path;
use tracing::{info, instrument};

/// Read a JSON array of content payloads.
///
/// # Errors
///
/// Returns a seed error if the file cannot be read or is not a JSON array of
/// payloads.
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_seed_file(path: &Path) -> CatalogResult<Vec<ContentInput>> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        StoreError::new(StoreErrorKind::Seed(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        )))
    })?;

    let inputs: Vec<ContentInput> = serde_json::from_str(&raw).map_err(|e| {
        StoreError::new(StoreErrorKind::Seed(format!(
            "Failed to parse {}: {}",
            path.display(),
            e
        )))
    })?;

    info!(count = inputs.len(), "Loaded seed contents");
    Ok(inputs)
}
