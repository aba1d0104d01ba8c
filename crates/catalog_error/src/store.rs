//! Content store error types.

/// Content store error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// The backing store could not serve the request
    #[display("Store unavailable: {}", _0)]
    Unavailable(String),
    /// Seed data could not be read or parsed
    #[display("Seed error: {}", _0)]
    Seed(String),
}

/// Store error with source location tracking.
///
/// # Examples
///
/// ```
/// use catalog_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::Seed("not an array".into()));
/// assert!(format!("{}", err).contains("not an array"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
