//! Create and update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload accepted by create and update.
///
/// `title` is required. Every other field is optional and `genreList`
/// defaults to empty. Update applies the payload as a full replacement, so an
/// omitted field clears the stored value.
///
/// # Examples
///
/// ```
/// use catalog_core::ContentInput;
///
/// let input: ContentInput =
///     serde_json::from_str(r#"{"title":"Movie A","genreList":["Action"]}"#).unwrap();
/// assert_eq!(input.title, "Movie A");
/// assert_eq!(input.genre_list, vec!["Action".to_string()]);
/// assert!(input.description.is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct ContentInput {
    /// Display title.
    pub title: String,

    /// Secondary title.
    #[builder(default)]
    #[serde(default)]
    pub sub_title: Option<String>,

    /// Free-form description.
    #[builder(default)]
    #[serde(default)]
    pub description: Option<String>,

    /// Artwork location.
    #[builder(default)]
    #[serde(default)]
    pub image_url: Option<String>,

    /// Running time in minutes.
    #[builder(default)]
    #[serde(default)]
    pub duration: Option<i32>,

    /// Availability window start.
    #[builder(default)]
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,

    /// Availability window end.
    #[builder(default)]
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,

    /// Genre tags.
    #[builder(default)]
    #[serde(default)]
    pub genre_list: Vec<String>,
}

impl ContentInput {
    /// Creates a new payload builder.
    pub fn builder() -> ContentInputBuilder {
        ContentInputBuilder::default()
    }

    /// Payload carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
