//! Trait definitions for the content catalog.
//!
//! The HTTP layer talks to persistence only through [`ContentRepository`];
//! adapters live in `catalog_database`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod repository;

pub use repository::ContentRepository;
