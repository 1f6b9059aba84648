//! Typed audit-log data selected by action type.

use crate::{
    ActionType, AuditLogEntry, OverwriteCreateAuditLogData, OverwriteDeleteAuditLogData,
    OverwriteUpdateAuditLogData,
};
use parley_error::AuditLogResult;
use tracing::{debug, instrument};

/// Decoded details of an audit-log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From)]
pub enum AuditLogData {
    /// `ActionType::OverwriteCreated`
    OverwriteCreate(OverwriteCreateAuditLogData),
    /// `ActionType::OverwriteUpdated`
    OverwriteUpdate(OverwriteUpdateAuditLogData),
    /// `ActionType::OverwriteDeleted`
    OverwriteDelete(OverwriteDeleteAuditLogData),
}

impl AuditLogData {
    /// Decode the entry according to its action type.
    ///
    /// Returns `Ok(None)` for action types without typed data.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error when a supported entry is malformed.
    #[instrument(skip(entry), fields(entry_id = %entry.id(), action = %entry.action_type()))]
    pub fn from_entry(entry: &AuditLogEntry) -> AuditLogResult<Option<Self>> {
        let data: Self = match entry.action_type() {
            ActionType::OverwriteCreated => OverwriteCreateAuditLogData::from_entry(entry)?.into(),
            ActionType::OverwriteUpdated => OverwriteUpdateAuditLogData::from_entry(entry)?.into(),
            ActionType::OverwriteDeleted => OverwriteDeleteAuditLogData::from_entry(entry)?.into(),
            _ => {
                debug!("No typed data for action");
                return Ok(None);
            }
        };
        Ok(Some(data))
    }
}
