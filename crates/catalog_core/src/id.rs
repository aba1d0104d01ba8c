//! Content identifiers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Opaque identifier assigned by the store when content is created.
///
/// Rendered as a hyphenated UUID string on the wire.
///
/// # Examples
///
/// ```
/// use catalog_core::ContentId;
///
/// let id = ContentId::generate();
/// let parsed: ContentId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
    ToSchema,
)]
#[serde(transparent)]
pub struct ContentId(Uuid);

impl ContentId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<ContentId> for Uuid {
    fn from(id: ContentId) -> Self {
        id.0
    }
}
