//! Diesel models for the contents table.

use catalog_core::{Content, ContentId, ContentInput};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Database row for the contents table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::contents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContentRow {
    /// Primary key
    pub id: Uuid,
    /// Content title
    pub title: String,
    /// Optional subtitle
    pub sub_title: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Optional image URL
    pub image_url: Option<String>,
    /// Optional duration
    pub duration: Option<i32>,
    /// Optional availability start
    pub start_time: Option<DateTime<Utc>>,
    /// Optional availability end
    pub end_time: Option<DateTime<Utc>>,
    /// Genres, without duplicates
    pub genre_list: Vec<String>,
}

impl From<ContentRow> for Content {
    fn from(row: ContentRow) -> Self {
        Content {
            id: ContentId::from(row.id),
            title: row.title,
            sub_title: row.sub_title,
            description: row.description,
            image_url: row.image_url,
            duration: row.duration,
            start_time: row.start_time,
            end_time: row.end_time,
            genre_list: row.genre_list,
        }
    }
}

/// Insertable row for a newly created content record.
///
/// `created_at` is left to the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::contents)]
pub struct NewContentRow {
    /// Primary key
    pub id: Uuid,
    /// Content title
    pub title: String,
    /// Optional subtitle
    pub sub_title: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Optional image URL
    pub image_url: Option<String>,
    /// Optional duration
    pub duration: Option<i32>,
    /// Optional availability start
    pub start_time: Option<DateTime<Utc>>,
    /// Optional availability end
    pub end_time: Option<DateTime<Utc>>,
    /// Genres, without duplicates
    pub genre_list: Vec<String>,
}

impl NewContentRow {
    /// Row for `input` stored under `id`.
    pub fn new(id: ContentId, input: ContentInput) -> Self {
        Self {
            id: id.into(),
            title: input.title,
            sub_title: input.sub_title,
            description: input.description,
            image_url: input.image_url,
            duration: input.duration,
            start_time: input.start_time,
            end_time: input.end_time,
            genre_list: input.genre_list,
        }
    }
}

/// Full-replace changeset for an existing record.
///
/// `None` fields are written as NULL rather than skipped, so an update
/// clears whatever the payload omits.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::contents)]
#[diesel(treat_none_as_null = true)]
pub struct ContentChangeset {
    /// Content title
    pub title: String,
    /// Optional subtitle
    pub sub_title: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Optional image URL
    pub image_url: Option<String>,
    /// Optional duration
    pub duration: Option<i32>,
    /// Optional availability start
    pub start_time: Option<DateTime<Utc>>,
    /// Optional availability end
    pub end_time: Option<DateTime<Utc>>,
    /// Genres, without duplicates
    pub genre_list: Vec<String>,
}

impl From<ContentInput> for ContentChangeset {
    fn from(input: ContentInput) -> Self {
        Self {
            title: input.title,
            sub_title: input.sub_title,
            description: input.description,
            image_url: input.image_url,
            duration: input.duration,
            start_time: input.start_time,
            end_time: input.end_time,
            genre_list: input.genre_list,
        }
    }
}
