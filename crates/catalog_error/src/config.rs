//! Startup configuration failures.
//!
//! Raised while the server assembles its settings: a layered source that
//! will not parse, a `--config` file that does not exist, a log filter that
//! `EnvFilter` rejects, or a store backend the build cannot provide.

/// A setting the server could not load or act on.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong, naming the offending key or source where known
    pub message: String,
    /// Line of the call that raised it
    pub line: u32,
    /// Source file of the call that raised it
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_error::ConfigError;
    ///
    /// let err = ConfigError::new("store.database_url is unset and DATABASE_URL is not defined");
    /// assert!(err.to_string().starts_with("Configuration Error: store.database_url"));
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
