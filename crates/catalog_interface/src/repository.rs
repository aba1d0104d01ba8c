//! The content store port.

use async_trait::async_trait;
use catalog_core::{Content, ContentId, ContentInput};
use catalog_error::CatalogResult;

/// Persistence for content records.
///
/// Implementations own the records and assign identifiers. Callers hold
/// transient copies only. Each call is independent; concurrent
/// read-modify-write sequences through this trait are last-write-wins.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Fetch a single record.
    ///
    /// # Returns
    ///
    /// `None` if no record has this id.
    async fn get_content(&self, id: ContentId) -> CatalogResult<Option<Content>>;

    /// Fetch every record, oldest first.
    async fn get_many_contents(&self) -> CatalogResult<Vec<Content>>;

    /// Persist a new record under a freshly assigned id.
    ///
    /// # Returns
    ///
    /// The stored record, or `None` when the store declined to create it.
    async fn create_content(&self, input: ContentInput) -> CatalogResult<Option<Content>>;

    /// Replace every mutable field of an existing record with `input`.
    ///
    /// Fields absent from `input` are cleared. The id never changes.
    ///
    /// # Returns
    ///
    /// The updated record, or `None` if no record has this id.
    async fn update_content(
        &self,
        id: ContentId,
        input: ContentInput,
    ) -> CatalogResult<Option<Content>>;

    /// Delete a record.
    ///
    /// Idempotent: deleting an unknown id succeeds and echoes the id.
    async fn delete_content(&self, id: ContentId) -> CatalogResult<ContentId>;
}
