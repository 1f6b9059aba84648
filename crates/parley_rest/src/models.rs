//! JSON models for the audit-log REST endpoint.
//!
//! Field names follow the wire format. Snowflakes accept either decimal strings
//! or plain numbers.

use crate::ActionType;
use parley_core::Snowflake;
use parley_error::JsonError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One property change recorded by an audit-log entry.
///
/// A JSON `null` on either side is read as absent.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct AuditLogChange {
    /// Name of the changed property (required)
    key: String,

    /// Value before the change (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    old_value: Option<Value>,
    /// Value after the change (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    new_value: Option<Value>,
}

/// Extra details attached to some action types.
#[derive(
    Debug,
    Clone,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct AuditLogOptions {
    /// Overwrite target id for overwrite actions (optional)
    #[serde(default)]
    id: Option<Snowflake>,
    /// Overwrite target type for overwrite actions (optional)
    #[serde(default, rename = "type")]
    overwrite_type: Option<String>,
    /// Role name for overwrite actions targeting a role (optional)
    #[serde(default)]
    role_name: Option<String>,
    /// Channel for message deletions (optional)
    #[serde(default)]
    channel_id: Option<Snowflake>,
    /// Number of deleted messages (optional)
    #[serde(default)]
    count: Option<String>,
    /// Prune inactivity window in days (optional)
    #[serde(default)]
    delete_member_days: Option<String>,
    /// Members removed by a prune (optional)
    #[serde(default)]
    members_removed: Option<String>,
}

/// A single audit-log entry.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct AuditLogEntry {
    /// Entry id (required)
    id: Snowflake,
    /// What happened (required)
    action_type: ActionType,

    /// User who performed the action (optional)
    #[serde(default)]
    #[builder(default)]
    user_id: Option<Snowflake>,
    /// Affected entity (optional)
    #[serde(default)]
    #[builder(default)]
    target_id: Option<Snowflake>,
    /// Property changes (optional)
    #[serde(default)]
    #[builder(default)]
    changes: Vec<AuditLogChange>,
    /// Action-specific details (optional)
    #[serde(default)]
    #[builder(default)]
    options: Option<AuditLogOptions>,
    /// Reason given by the acting user (optional)
    #[serde(default)]
    #[builder(default)]
    reason: Option<String>,
}

/// A user referenced by audit-log entries.
#[derive(
    Debug,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct AuditLogUser {
    /// User id (required)
    id: Snowflake,
    /// Username without @ (required)
    username: String,

    /// Legacy 4-digit discriminator (optional)
    #[serde(default)]
    #[builder(default)]
    discriminator: Option<String>,
    /// Display name (optional)
    #[serde(default)]
    #[builder(default)]
    global_name: Option<String>,
    /// True if bot account (optional)
    #[serde(default)]
    #[builder(default)]
    bot: Option<bool>,
}

/// The audit-log response body.
#[derive(
    Debug,
    Clone,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct AuditLog {
    /// Users referenced by the entries
    #[serde(default)]
    users: Vec<AuditLogUser>,
    /// Entries, newest first
    #[serde(default)]
    audit_log_entries: Vec<AuditLogEntry>,
}

impl AuditLog {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a valid audit-log payload.
    pub fn from_json(body: &str) -> Result<Self, JsonError> {
        serde_json::from_str(body)
            .map_err(|e| JsonError::new(format!("Failed to parse audit log: {}", e)))
    }

    /// Looks up a referenced user.
    pub fn user(&self, id: Snowflake) -> Option<&AuditLogUser> {
        self.users.iter().find(|u| u.id == id)
    }
}
