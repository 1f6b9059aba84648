//! Top-level error wrapper types.

use crate::{AuditLogError, CommandError, ConfigError, JsonError};

/// Every error the Parley crates can produce.
///
/// # Examples
///
/// ```
/// use parley_error::{ParleyError, ConfigError};
///
/// let err: ParleyError = ConfigError::new("bad separator").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ParleyErrorKind {
    /// Command framework error
    #[from(CommandError)]
    Command(CommandError),
    /// Audit-log decoding error
    #[from(AuditLogError)]
    AuditLog(AuditLogError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Parley error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Parley Error: {}", _0)]
pub struct ParleyError(Box<ParleyErrorKind>);

impl ParleyError {
    /// Create a new error from a kind.
    pub fn new(kind: ParleyErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ParleyErrorKind {
        &self.0
    }
}

impl<T> From<T> for ParleyError
where
    T: Into<ParleyErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Parley operations.
pub type ParleyResult<T> = std::result::Result<T, ParleyError>;
