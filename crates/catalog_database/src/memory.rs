//! In-memory content store.

use async_trait::async_trait;
use catalog_core::{Content, ContentId, ContentInput};
use catalog_error::CatalogResult;
use catalog_interface::ContentRepository;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Process-local content store.
///
/// Records are kept in insertion order. Clones share the same records, so a
/// single handle can be injected into every request.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentRepository {
    contents: Arc<RwLock<Vec<Content>>>,
}

impl InMemoryContentRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one record per payload.
    pub fn with_inputs(inputs: impl IntoIterator<Item = ContentInput>) -> Self {
        let contents: Vec<Content> = inputs
            .into_iter()
            .map(|input| Content::from_input(ContentId::generate(), input))
            .collect();
        debug!(count = contents.len(), "Seeded in-memory content store");
        Self {
            contents: Arc::new(RwLock::new(contents)),
        }
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    #[instrument(skip(self), fields(%id))]
    async fn get_content(&self, id: ContentId) -> CatalogResult<Option<Content>> {
        let contents = self.contents.read().await;
        Ok(contents.iter().find(|c| c.id == id).cloned())
    }

    #[instrument(skip(self))]
    async fn get_many_contents(&self) -> CatalogResult<Vec<Content>> {
        Ok(self.contents.read().await.clone())
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create_content(&self, input: ContentInput) -> CatalogResult<Option<Content>> {
        let content = Content::from_input(ContentId::generate(), input);
        self.contents.write().await.push(content.clone());
        debug!(id = %content.id, "Created content");
        Ok(Some(content))
    }

    #[instrument(skip(self, input), fields(%id))]
    async fn update_content(
        &self,
        id: ContentId,
        input: ContentInput,
    ) -> CatalogResult<Option<Content>> {
        let mut contents = self.contents.write().await;
        let Some(slot) = contents.iter_mut().find(|c| c.id == id) else {
            debug!("No content to update");
            return Ok(None);
        };
        *slot = Content::from_input(id, input);
        Ok(Some(slot.clone()))
    }

    #[instrument(skip(self), fields(%id))]
    async fn delete_content(&self, id: ContentId) -> CatalogResult<ContentId> {
        let mut contents = self.contents.write().await;
        let before = contents.len();
        contents.retain(|c| c.id != id);
        debug!(removed = before - contents.len(), "Deleted content");
        Ok(id)
    }
}
