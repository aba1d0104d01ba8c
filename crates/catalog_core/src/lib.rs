//! Core data types for the content catalog.
//!
//! This crate provides the `Content` entity, its create/update payload and
//! the genre-list operations shared by every catalog interface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod content;
mod genre;
mod id;
mod input;

pub use content::Content;
pub use genre::{merge_genres, remove_genres};
pub use id::ContentId;
pub use input::{ContentInput, ContentInputBuilder, ContentInputBuilderError};
