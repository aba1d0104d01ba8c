//! Content service: the operations exposed over HTTP.

use crate::ApiError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_core::{Content, ContentId, ContentInput, merge_genres, remove_genres};
use catalog_error::CatalogResult;
use catalog_interface::ContentRepository;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Result of a service operation that may legitimately find nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOutcome<T> {
    /// The operation produced a value
    Found(T),
    /// The addressed content does not exist
    NotFound,
    /// The store faulted or produced nothing where something was required
    Failed,
}

impl<T> From<Option<T>> for ContentOutcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ContentOutcome::NotFound, ContentOutcome::Found)
    }
}

impl<T: Serialize> IntoResponse for ContentOutcome<T> {
    fn into_response(self) -> Response {
        match self {
            ContentOutcome::Found(value) => (StatusCode::OK, Json(value)).into_response(),
            ContentOutcome::NotFound => ApiError::NotFound.into_response(),
            ContentOutcome::Failed => ApiError::Internal.into_response(),
        }
    }
}

/// Catalog operations over any [`ContentRepository`].
///
/// Plain CRUD faults propagate to the caller. The genre operations trap
/// faults themselves, log them and report [`ContentOutcome::Failed`].
#[derive(Clone)]
pub struct ContentService {
    repository: Arc<dyn ContentRepository>,
}

impl std::fmt::Debug for ContentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService").finish_non_exhaustive()
    }
}

impl ContentService {
    /// Create a service over the given store.
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    /// All content, or `NotFound` when the store is empty.
    #[instrument(skip(self))]
    pub async fn list_contents(&self) -> CatalogResult<ContentOutcome<Vec<Content>>> {
        let contents = self.repository.get_many_contents().await?;
        if contents.is_empty() {
            debug!("Store holds no content");
            return Ok(ContentOutcome::NotFound);
        }
        Ok(ContentOutcome::Found(contents))
    }

    /// One record by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn get_content(&self, id: ContentId) -> CatalogResult<ContentOutcome<Content>> {
        Ok(self.repository.get_content(id).await?.into())
    }

    /// Create a record. A store that reports no record is a failure.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_content(&self, input: ContentInput) -> CatalogResult<ContentOutcome<Content>> {
        match self.repository.create_content(input).await? {
            Some(content) => Ok(ContentOutcome::Found(content)),
            None => {
                warn!("Store created no content");
                Ok(ContentOutcome::Failed)
            }
        }
    }

    /// Replace every field of a record.
    #[instrument(skip(self, input), fields(%id))]
    pub async fn update_content(
        &self,
        id: ContentId,
        input: ContentInput,
    ) -> CatalogResult<ContentOutcome<Content>> {
        Ok(self.repository.update_content(id, input).await?.into())
    }

    /// Delete a record; succeeds whether or not it existed.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete_content(&self, id: ContentId) -> CatalogResult<ContentId> {
        self.repository.delete_content(id).await
    }

    /// Union `genres` into the record's genre list.
    #[instrument(skip(self, genres), fields(%id, count = genres.len()))]
    pub async fn add_genres(&self, id: ContentId, genres: Vec<String>) -> ContentOutcome<Content> {
        info!("Adding genres to content");
        match self
            .rewrite_genres(id, |existing| merge_genres(existing, &genres))
            .await
        {
            Ok(Some(content)) => {
                info!("Genres added");
                ContentOutcome::Found(content)
            }
            Ok(None) => {
                info!("Content not found while adding genres");
                ContentOutcome::NotFound
            }
            Err(e) => {
                error!(error = %e, "Failed to add genres");
                ContentOutcome::Failed
            }
        }
    }

    /// Drop every occurrence of `genres` from the record's genre list.
    #[instrument(skip(self, genres), fields(%id, count = genres.len()))]
    pub async fn remove_genres(&self, id: ContentId, genres: Vec<String>) -> ContentOutcome<Content> {
        info!("Removing genres from content");
        match self
            .rewrite_genres(id, |existing| remove_genres(existing, &genres))
            .await
        {
            Ok(Some(content)) => {
                info!("Genres removed");
                ContentOutcome::Found(content)
            }
            Ok(None) => {
                info!("Content not found while removing genres");
                ContentOutcome::NotFound
            }
            Err(e) => {
                error!(error = %e, "Failed to remove genres");
                ContentOutcome::Failed
            }
        }
    }

    /// Fetch, rewrite the genre list and persist the full record.
    ///
    /// `Ok(None)` when the record is missing at either step.
    async fn rewrite_genres<F>(&self, id: ContentId, rewrite: F) -> CatalogResult<Option<Content>>
    where
        F: FnOnce(&[String]) -> Vec<String> + Send,
    {
        let Some(content) = self.repository.get_content(id).await? else {
            return Ok(None);
        };
        let input = ContentInput {
            genre_list: rewrite(&content.genre_list),
            ..content.to_input()
        };
        self.repository.update_content(id, input).await
    }
}
