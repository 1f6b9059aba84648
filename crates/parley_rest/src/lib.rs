//! REST entities for Parley.
//!
//! This crate models the platform's audit-log REST payloads and decodes entries
//! into typed data.
//!
//! # Audit logs
//!
//! - `AuditLog` / `AuditLogEntry` / `AuditLogChange` - JSON models as returned by the API
//! - `ChangeSet` - first-match-wins index over an entry's change records
//! - `Overwrite*AuditLogData` - typed permission overwrite changes
//! - `AuditLogData` - typed data selected by the entry's `ActionType`
//! - `RestAuditLogEntry` - an entry with its data decoded and responsible user resolved
//!
//! # Example
//!
//! ```rust,ignore
//! use parley_rest::{AuditLog, RestAuditLogEntry};
//!
//! let log = AuditLog::from_json(&body)?;
//! for entry in RestAuditLogEntry::all(&log)? {
//!     println!("{} by {:?}", entry.action(), entry.user());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action_type;
mod changes;
mod data;
mod entry;
mod models;
mod overwrite_data;

pub use action_type::ActionType;
pub use changes::{ChangeSet, Side};
pub use data::AuditLogData;
pub use entry::RestAuditLogEntry;
pub use models::{
    AuditLog, AuditLogBuilder, AuditLogBuilderError, AuditLogChange, AuditLogChangeBuilder,
    AuditLogChangeBuilderError, AuditLogEntry, AuditLogEntryBuilder, AuditLogEntryBuilderError,
    AuditLogOptions, AuditLogOptionsBuilder, AuditLogOptionsBuilderError, AuditLogUser,
    AuditLogUserBuilder, AuditLogUserBuilderError,
};
pub use overwrite_data::{
    OverwriteCreateAuditLogData, OverwriteDeleteAuditLogData, OverwriteUpdateAuditLogData,
};
