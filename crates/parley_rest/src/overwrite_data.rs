//! Permission overwrite audit-log data.

use crate::{AuditLogEntry, ChangeSet, Side};
use parley_core::{Overwrite, OverwritePermissions, PermissionTarget, Snowflake};
use parley_error::{AuditLogError, AuditLogErrorKind, AuditLogResult};
use tracing::{debug, instrument, warn};

const DENY: &str = "deny";
const TYPE: &str = "type";
const ID: &str = "id";
const ALLOW: &str = "allow";

/// Rebuilds a full overwrite from one side of the `deny`, `type`, `id`, `allow` changes.
///
/// All four records are required; a missing one is reported before any value is
/// converted, in the order `deny`, `type`, `id`, `allow`.
fn overwrite_from(entry: &AuditLogEntry, side: Side) -> AuditLogResult<Overwrite> {
    let changes = ChangeSet::index(entry.changes());

    for field in [DENY, TYPE, ID, ALLOW] {
        if let Err(e) = changes.require(field, side) {
            warn!(entry_id = %entry.id(), field, %side, "Overwrite change is missing");
            return Err(e);
        }
    }

    let deny = changes.u64(DENY, side)?;
    let kind = changes.string(TYPE, side)?;
    let id = changes.u64(ID, side)?;
    let allow = changes.u64(ALLOW, side)?;

    let target = PermissionTarget::from_audit_log_type(&kind);
    debug!(id, %kind, %target, allow, deny, "Decoded overwrite");

    Ok(Overwrite::new(
        Snowflake::new(id),
        target,
        OverwritePermissions::new(allow, deny),
    ))
}

/// A permission overwrite was removed from a channel.
///
/// # Example
///
/// ```
/// use parley_core::PermissionTarget;
/// use parley_rest::{
///     ActionType, AuditLogChangeBuilder, AuditLogEntryBuilder, OverwriteDeleteAuditLogData,
/// };
/// use serde_json::json;
///
/// let change = |key: &str, old: serde_json::Value| {
///     AuditLogChangeBuilder::default().key(key).old_value(old).build().unwrap()
/// };
/// let entry = AuditLogEntryBuilder::default()
///     .id(parley_core::Snowflake::new(1))
///     .action_type(ActionType::OverwriteDeleted)
///     .changes(vec![
///         change("id", json!("42")),
///         change("type", json!("member")),
///         change("allow", json!("8")),
///         change("deny", json!("16")),
///     ])
///     .build()
///     .unwrap();
///
/// let data = OverwriteDeleteAuditLogData::from_entry(&entry).unwrap();
/// assert_eq!(data.overwrite().target_id().get(), 42);
/// assert_eq!(data.overwrite().target_type(), PermissionTarget::User);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverwriteDeleteAuditLogData {
    overwrite: Overwrite,
}

impl OverwriteDeleteAuditLogData {
    /// Decode from the entry's old values.
    ///
    /// # Errors
    ///
    /// - `MissingAuditLogField` if `deny`, `type`, `id` or `allow` has no old value
    /// - `InvalidAuditLogValue` if a value has the wrong shape
    #[instrument(skip(entry), fields(entry_id = %entry.id()))]
    pub fn from_entry(entry: &AuditLogEntry) -> AuditLogResult<Self> {
        overwrite_from(entry, Side::OldValue).map(|overwrite| Self { overwrite })
    }

    /// The overwrite as it was before deletion.
    pub fn overwrite(&self) -> &Overwrite {
        &self.overwrite
    }
}

/// A permission overwrite was added to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverwriteCreateAuditLogData {
    overwrite: Overwrite,
}

impl OverwriteCreateAuditLogData {
    /// Decode from the entry's new values.
    ///
    /// # Errors
    ///
    /// - `MissingAuditLogField` if `deny`, `type`, `id` or `allow` has no new value
    /// - `InvalidAuditLogValue` if a value has the wrong shape
    #[instrument(skip(entry), fields(entry_id = %entry.id()))]
    pub fn from_entry(entry: &AuditLogEntry) -> AuditLogResult<Self> {
        overwrite_from(entry, Side::NewValue).map(|overwrite| Self { overwrite })
    }

    /// The overwrite as created.
    pub fn overwrite(&self) -> &Overwrite {
        &self.overwrite
    }
}

/// A permission overwrite's masks were changed.
///
/// The target is not part of the change records; it comes from the entry options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverwriteUpdateAuditLogData {
    before: OverwritePermissions,
    after: OverwritePermissions,
    overwrite_target_id: Snowflake,
    overwrite_target_type: PermissionTarget,
}

impl OverwriteUpdateAuditLogData {
    /// Decode from the `allow`/`deny` changes and the entry options.
    ///
    /// A mask with no recorded value on one side reads as 0.
    ///
    /// # Errors
    ///
    /// - `MissingOptions("options")` if the entry has no options
    /// - `MissingOptions("id")` or `MissingOptions("type")` if the options lack that field
    /// - `InvalidAuditLogValue` if a mask has the wrong shape
    #[instrument(skip(entry), fields(entry_id = %entry.id()))]
    pub fn from_entry(entry: &AuditLogEntry) -> AuditLogResult<Self> {
        let changes = ChangeSet::index(entry.changes());

        let mask = |key: &str, side: Side| -> AuditLogResult<u64> {
            Ok(changes.optional_u64(key, side)?.unwrap_or(0))
        };
        let before = OverwritePermissions::new(
            mask(ALLOW, Side::OldValue)?,
            mask(DENY, Side::OldValue)?,
        );
        let after = OverwritePermissions::new(
            mask(ALLOW, Side::NewValue)?,
            mask(DENY, Side::NewValue)?,
        );

        let missing = |option: &str| {
            warn!(option, "Overwrite update entry is missing an option");
            AuditLogError::new(AuditLogErrorKind::MissingOptions(option.to_string()))
        };
        let options = entry.options().as_ref().ok_or_else(|| missing("options"))?;
        let overwrite_target_id = (*options.id()).ok_or_else(|| missing("id"))?;
        let kind = options
            .overwrite_type()
            .as_deref()
            .ok_or_else(|| missing("type"))?;

        debug!(%overwrite_target_id, kind, ?before, ?after, "Decoded overwrite update");

        Ok(Self {
            before,
            after,
            overwrite_target_id,
            overwrite_target_type: PermissionTarget::from_audit_log_type(kind),
        })
    }

    /// Masks before the change.
    pub fn before(&self) -> OverwritePermissions {
        self.before
    }

    /// Masks after the change.
    pub fn after(&self) -> OverwritePermissions {
        self.after
    }

    /// The user or role the overwrite applies to.
    pub fn overwrite_target_id(&self) -> Snowflake {
        self.overwrite_target_id
    }

    /// Whether the target is a user or a role.
    pub fn overwrite_target_type(&self) -> PermissionTarget {
        self.overwrite_target_type
    }
}
