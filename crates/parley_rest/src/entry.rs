//! Audit-log entries with decoded data and resolved users.

use crate::{ActionType, AuditLog, AuditLogData, AuditLogEntry, AuditLogUser};
use derive_getters::Getters;
use parley_core::Snowflake;
use parley_error::AuditLogResult;
use tracing::{debug, instrument};

/// An audit-log entry ready for consumers.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct RestAuditLogEntry {
    /// Entry id
    id: Snowflake,
    /// What happened
    action: ActionType,
    /// Typed details, when the action type has them
    data: Option<AuditLogData>,
    /// Who did it, when the log includes that user
    user: Option<AuditLogUser>,
    /// Reason given by the acting user
    reason: Option<String>,
}

impl RestAuditLogEntry {
    /// Decode one entry, resolving its user against the log's user list.
    ///
    /// # Errors
    ///
    /// Returns the data decoder's error when a supported entry is malformed.
    #[instrument(skip(log, entry), fields(entry_id = %entry.id()))]
    pub fn from_model(log: &AuditLog, entry: &AuditLogEntry) -> AuditLogResult<Self> {
        let data = AuditLogData::from_entry(entry)?;
        let user = (*entry.user_id()).and_then(|id| log.user(id)).cloned();
        if user.is_none() {
            debug!(user_id = ?entry.user_id(), "Acting user not included in log");
        }

        Ok(Self {
            id: *entry.id(),
            action: *entry.action_type(),
            data,
            user,
            reason: entry.reason().clone(),
        })
    }

    /// Decode every entry in the log, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first malformed entry.
    pub fn all(log: &AuditLog) -> AuditLogResult<Vec<Self>> {
        log.audit_log_entries()
            .iter()
            .map(|entry| Self::from_model(log, entry))
            .collect()
    }
}
