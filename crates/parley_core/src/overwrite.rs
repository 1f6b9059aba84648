//! Channel permission overwrites.

use crate::{OverwritePermissions, Snowflake};
use serde::{Deserialize, Serialize};

/// What kind of entity an overwrite applies to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum PermissionTarget {
    /// A single guild member.
    User,
    /// Every member holding a role.
    Role,
}

impl PermissionTarget {
    /// Maps the audit log's overwrite type string to a target.
    ///
    /// Only `"member"` names a user; every other value is treated as a role.
    ///
    /// ```
    /// use parley_core::PermissionTarget;
    ///
    /// assert_eq!(PermissionTarget::from_audit_log_type("member"), PermissionTarget::User);
    /// assert_eq!(PermissionTarget::from_audit_log_type("role"), PermissionTarget::Role);
    /// ```
    pub fn from_audit_log_type(kind: &str) -> Self {
        if kind == "member" {
            PermissionTarget::User
        } else {
            PermissionTarget::Role
        }
    }
}

/// A permission overwrite on a channel, keyed by its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Overwrite {
    target_id: Snowflake,
    target_type: PermissionTarget,
    permissions: OverwritePermissions,
}

impl Overwrite {
    /// Creates an overwrite.
    pub const fn new(
        target_id: Snowflake,
        target_type: PermissionTarget,
        permissions: OverwritePermissions,
    ) -> Self {
        Self {
            target_id,
            target_type,
            permissions,
        }
    }

    /// The user or role this overwrite applies to.
    pub const fn target_id(&self) -> Snowflake {
        self.target_id
    }

    /// Whether `target_id` names a user or a role.
    pub const fn target_type(&self) -> PermissionTarget {
        self.target_type
    }

    /// The allow/deny masks.
    pub const fn permissions(&self) -> OverwritePermissions {
        self.permissions
    }
}
