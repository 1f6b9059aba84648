//! Audit-log decoding errors.

use derive_getters::Getters;

/// Specific audit-log decoding error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AuditLogErrorKind {
    /// A change record the entry must contain is absent, or has no value on the side read.
    #[display("Audit log entry is missing the '{}' change", _0)]
    MissingAuditLogField(String),

    /// A change record holds a value of the wrong shape.
    #[display("Invalid value for audit log field '{}': {}", field, reason)]
    InvalidAuditLogValue {
        /// Changed property name
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The entry carries no options, or lacks the named option.
    #[display("Audit log entry is missing option '{}'", _0)]
    MissingOptions(String),
}

/// Audit-log error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Audit Log Error: {} at line {} in {}", kind, line, file)]
pub struct AuditLogError {
    kind: AuditLogErrorKind,
    line: u32,
    file: &'static str,
}

impl AuditLogError {
    /// Create a new audit-log error with caller location tracking.
    #[track_caller]
    pub fn new(kind: AuditLogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for audit-log decoding.
pub type AuditLogResult<T> = Result<T, AuditLogError>;
