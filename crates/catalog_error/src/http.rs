//! Listener failures.

/// The API listener could not bind its address, or `axum::serve` returned
/// an I/O error while running.
///
/// Request-level failures never use this type; handlers answer those with
/// a status code.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// Address and I/O error text
    pub message: String,
    /// Line of the call that raised it
    pub line: u32,
    /// Source file of the call that raised it
    pub file: &'static str,
}

impl HttpError {
    /// Record a listener failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_error::HttpError;
    ///
    /// let err = HttpError::new("Failed to bind 127.0.0.1:4000: address in use");
    /// assert!(err.to_string().contains("127.0.0.1:4000"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
