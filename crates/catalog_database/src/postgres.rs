//! PostgreSQL content store.

use crate::models::{ContentChangeset, ContentRow, NewContentRow};
use crate::schema::contents;
use crate::{DatabaseResult, PgPool};
use async_trait::async_trait;
use catalog_core::{Content, ContentId, ContentInput};
use catalog_error::{CatalogResult, DatabaseError, DatabaseErrorKind};
use catalog_interface::ContentRepository;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tracing::{debug, instrument};

/// Database-backed content repository.
///
/// Diesel is synchronous, so every query runs on the blocking thread pool
/// with a connection checked out of the shared pool.
#[derive(Clone)]
pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    /// Create a new content repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run<T, F>(&self, op: F) -> CatalogResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> DatabaseResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        let result = tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            op(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;

        Ok(result?)
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    #[instrument(skip(self), fields(%id))]
    async fn get_content(&self, id: ContentId) -> CatalogResult<Option<Content>> {
        self.run(move |conn| {
            let row = contents::table
                .find(*id.as_uuid())
                .select(ContentRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(Content::from))
        })
        .await
    }

    #[instrument(skip(self))]
    async fn get_many_contents(&self) -> CatalogResult<Vec<Content>> {
        self.run(|conn| {
            let rows = contents::table
                .order(contents::created_at.asc())
                .select(ContentRow::as_select())
                .load(conn)?;
            debug!(count = rows.len(), "Loaded contents");
            Ok(rows.into_iter().map(Content::from).collect())
        })
        .await
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create_content(&self, input: ContentInput) -> CatalogResult<Option<Content>> {
        let row = NewContentRow::new(ContentId::generate(), input);
        self.run(move |conn| {
            let created = diesel::insert_into(contents::table)
                .values(&row)
                .returning(ContentRow::as_returning())
                .get_result(conn)
                .optional()?;
            Ok(created.map(Content::from))
        })
        .await
    }

    #[instrument(skip(self, input), fields(%id))]
    async fn update_content(
        &self,
        id: ContentId,
        input: ContentInput,
    ) -> CatalogResult<Option<Content>> {
        let changes = ContentChangeset::from(input);
        self.run(move |conn| {
            let updated = diesel::update(contents::table.find(*id.as_uuid()))
                .set(&changes)
                .returning(ContentRow::as_returning())
                .get_result(conn)
                .optional()?;
            Ok(updated.map(Content::from))
        })
        .await
    }

    #[instrument(skip(self), fields(%id))]
    async fn delete_content(&self, id: ContentId) -> CatalogResult<ContentId> {
        self.run(move |conn| {
            let removed = diesel::delete(contents::table.find(*id.as_uuid())).execute(conn)?;
            debug!(removed, "Deleted content");
            Ok(id)
        })
        .await
    }
}
