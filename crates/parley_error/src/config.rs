//! Configuration errors.

/// `parley.toml` could not be loaded, or holds settings the command service rejects.
///
/// Covers unreadable files, TOML that does not fit `ParleyConfig`, a
/// `commands.default_run_mode` of `default`, an alphanumeric
/// `commands.separator_char` and an invalid `logging.level` directive.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong, naming the offending key where there is one
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Records a configuration failure at the caller's location.
    ///
    /// # Example
    ///
    /// ```
    /// use parley_error::{ConfigError, ParleyResult};
    ///
    /// fn check_separator(separator: char) -> ParleyResult<()> {
    ///     if separator.is_alphanumeric() {
    ///         return Err(ConfigError::new(format!(
    ///             "commands.separator_char must not be alphanumeric, got {:?}",
    ///             separator
    ///         ))
    ///         .into());
    ///     }
    ///     Ok(())
    /// }
    ///
    /// assert!(check_separator(' ').is_ok());
    /// let err = check_separator('x').unwrap_err();
    /// assert!(err.to_string().contains("commands.separator_char"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
