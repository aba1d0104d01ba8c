//! Top-level error wrapper types.

#[cfg(feature = "database")]
use crate::DatabaseError;
use crate::{ConfigError, HttpError, StoreError};

/// Every error condition the catalog can raise.
///
/// # Examples
///
/// ```
/// use catalog_error::{CatalogError, HttpError};
///
/// let err: CatalogError = HttpError::new("address in use").into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CatalogErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Content store error
    #[from(StoreError)]
    Store(StoreError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
}

/// Catalog error with kind discrimination.
///
/// # Examples
///
/// ```
/// use catalog_error::{CatalogErrorKind, CatalogResult, StoreError, StoreErrorKind};
///
/// fn might_fail() -> CatalogResult<()> {
///     Err(StoreError::new(StoreErrorKind::Unavailable("poisoned".into())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), CatalogErrorKind::Store(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {}", _0)]
pub struct CatalogError(Box<CatalogErrorKind>);

impl CatalogError {
    /// Create a new error from a kind.
    pub fn new(kind: CatalogErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CatalogErrorKind {
        &self.0
    }
}

impl<T> From<T> for CatalogError
where
    T: Into<CatalogErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
