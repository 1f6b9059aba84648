//! REST payload decoding errors.

/// A REST response body could not be decoded into Parley's models.
///
/// Raised by `AuditLog::from_json` when the body is not valid JSON or does not
/// match the audit-log shape, for example a snowflake that is not a decimal string.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Decoder message, prefixed with the payload being decoded
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Records a decoding failure at the caller's location.
    ///
    /// # Example
    ///
    /// ```
    /// use parley_error::{JsonError, ParleyError, ParleyErrorKind};
    ///
    /// let err = JsonError::new("Failed to parse audit log: invalid snowflake \"x\"");
    /// assert!(err.to_string().starts_with("JSON Error: Failed to parse audit log"));
    ///
    /// let err: ParleyError = err.into();
    /// assert!(matches!(err.kind(), ParleyErrorKind::Json(_)));
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
