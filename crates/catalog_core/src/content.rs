//! The content entity.

use crate::{ContentId, ContentInput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted content record.
///
/// The genre list is an ordered sequence treated as a set: the genre
/// operations never leave duplicates behind.
///
/// # Examples
///
/// ```
/// use catalog_core::{Content, ContentId, ContentInput};
///
/// let id = ContentId::generate();
/// let content = Content::from_input(id, ContentInput::titled("Movie A"));
/// assert_eq!(content.id, id);
/// assert_eq!(content.to_input(), ContentInput::titled("Movie A"));
///
/// let json = serde_json::to_value(&content).unwrap();
/// assert!(json.get("genreList").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Store-assigned identifier, immutable once created.
    pub id: ContentId,
    /// Display title.
    pub title: String,
    /// Secondary title.
    pub sub_title: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Artwork location.
    pub image_url: Option<String>,
    /// Running time in minutes.
    pub duration: Option<i32>,
    /// Availability window start.
    pub start_time: Option<DateTime<Utc>>,
    /// Availability window end.
    pub end_time: Option<DateTime<Utc>>,
    /// Genre tags.
    pub genre_list: Vec<String>,
}

impl Content {
    /// Build a record from a payload under the given identifier.
    pub fn from_input(id: ContentId, input: ContentInput) -> Self {
        Self {
            id,
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

    /// The payload that reproduces every mutable field of this record.
    pub fn to_input(&self) -> ContentInput {
        ContentInput {
            title: self.title.clone(),
            sub_title: self.sub_title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            duration: self.duration,
            start_time: self.start_time,
            end_time: self.end_time,
            genre_list: self.genre_list.clone(),
        }
    }
}
