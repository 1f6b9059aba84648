//! Lookup over an entry's change records.

use crate::AuditLogChange;
use parley_error::{AuditLogError, AuditLogErrorKind, AuditLogResult};
use serde_json::Value;
use std::collections::HashMap;

/// Which half of a change record to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    /// The value before the change.
    OldValue,
    /// The value after the change.
    NewValue,
}

/// Change records of one entry, indexed by property name in a single pass.
///
/// When a property appears more than once, the first record wins.
///
/// # Example
///
/// ```
/// use parley_rest::{AuditLogChangeBuilder, ChangeSet, Side};
/// use serde_json::json;
///
/// let changes = vec![
///     AuditLogChangeBuilder::default().key("id").old_value(json!("1")).build().unwrap(),
///     AuditLogChangeBuilder::default().key("id").old_value(json!("2")).build().unwrap(),
/// ];
/// let set = ChangeSet::index(&changes);
/// assert_eq!(set.u64("id", Side::OldValue).unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChangeSet<'a> {
    by_key: HashMap<&'a str, &'a AuditLogChange>,
}

impl<'a> ChangeSet<'a> {
    /// Index `changes` by property name.
    pub fn index(changes: &'a [AuditLogChange]) -> Self {
        let mut by_key = HashMap::with_capacity(changes.len());
        for change in changes {
            by_key.entry(change.key().as_str()).or_insert(change);
        }
        Self { by_key }
    }

    /// The first record for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&'a AuditLogChange> {
        self.by_key.get(key).copied()
    }

    /// One side of the record for `key`, if both the record and that side are present.
    pub fn value(&self, key: &str, side: Side) -> Option<&'a Value> {
        let change = self.get(key)?;
        match side {
            Side::OldValue => change.old_value().as_ref(),
            Side::NewValue => change.new_value().as_ref(),
        }
    }

    /// Like [`value`](Self::value), but absence is an error.
    ///
    /// # Errors
    ///
    /// Returns `MissingAuditLogField` when the record or the requested side is absent.
    pub fn require(&self, key: &str, side: Side) -> AuditLogResult<&'a Value> {
        self.value(key, side).ok_or_else(|| {
            AuditLogError::new(AuditLogErrorKind::MissingAuditLogField(key.to_string()))
        })
    }

    /// Reads a required side as an unsigned 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `MissingAuditLogField` or `InvalidAuditLogValue`.
    pub fn u64(&self, key: &str, side: Side) -> AuditLogResult<u64> {
        as_u64(key, self.require(key, side)?)
    }

    /// Reads a required side as a string.
    ///
    /// # Errors
    ///
    /// Returns `MissingAuditLogField` or `InvalidAuditLogValue`.
    pub fn string(&self, key: &str, side: Side) -> AuditLogResult<String> {
        as_string(key, self.require(key, side)?)
    }

    /// Reads an optional side as an unsigned 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAuditLogValue` if a present value is not an integer.
    pub fn optional_u64(&self, key: &str, side: Side) -> AuditLogResult<Option<u64>> {
        self.value(key, side).map(|v| as_u64(key, v)).transpose()
    }
}

/// Accepts a JSON number or a decimal string.
pub(crate) fn as_u64(field: &str, value: &Value) -> AuditLogResult<u64> {
    let invalid = |reason: String| {
        AuditLogError::new(AuditLogErrorKind::InvalidAuditLogValue {
            field: field.to_string(),
            reason,
        })
    };

    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| invalid(format!("{} is not an unsigned 64-bit integer", n))),
        Value::String(s) => s
            .parse()
            .map_err(|e| invalid(format!("'{}' is not an unsigned 64-bit integer: {}", s, e))),
        other => Err(invalid(format!("expected integer, got {}", other))),
    }
}

/// Accepts a JSON string, or a number rendered as its decimal text.
pub(crate) fn as_string(field: &str, value: &Value) -> AuditLogResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(AuditLogError::new(
            AuditLogErrorKind::InvalidAuditLogValue {
                field: field.to_string(),
                reason: format!("expected string, got {}", other),
            },
        )),
    }
}
