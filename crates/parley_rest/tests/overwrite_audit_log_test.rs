use parley_core::{ChannelPermission, PermValue, PermissionTarget, Snowflake};
use parley_error::AuditLogErrorKind;
use parley_rest::{
    ActionType, AuditLogChange, AuditLogChangeBuilder, AuditLogEntry, AuditLogEntryBuilder,
    AuditLogOptionsBuilder, OverwriteCreateAuditLogData, OverwriteDeleteAuditLogData,
    OverwriteUpdateAuditLogData,
};
use serde_json::{Value, json};

fn old(key: &str, value: Value) -> AuditLogChange {
    AuditLogChangeBuilder::default()
        .key(key)
        .old_value(value)
        .build()
        .unwrap()
}

fn new(key: &str, value: Value) -> AuditLogChange {
    AuditLogChangeBuilder::default()
        .key(key)
        .new_value(value)
        .build()
        .unwrap()
}

fn entry(action: ActionType, changes: Vec<AuditLogChange>) -> AuditLogEntry {
    AuditLogEntryBuilder::default()
        .id(Snowflake::new(900))
        .action_type(action)
        .changes(changes)
        .build()
        .unwrap()
}

fn deleted(kind: &str) -> AuditLogEntry {
    entry(
        ActionType::OverwriteDeleted,
        vec![
            old("id", json!("42")),
            old("type", json!(kind)),
            old("allow", json!("8")),
            old("deny", json!("16")),
        ],
    )
}

#[test]
fn delete_decodes_member_overwrite() {
    let data = OverwriteDeleteAuditLogData::from_entry(&deleted("member")).unwrap();
    let overwrite = data.overwrite();

    assert_eq!(overwrite.target_id(), Snowflake::new(42));
    assert_eq!(overwrite.target_type(), PermissionTarget::User);
    assert_eq!(overwrite.permissions().allow_value(), 8);
    assert_eq!(overwrite.permissions().deny_value(), 16);
}

#[test]
fn delete_treats_role_as_role() {
    let data = OverwriteDeleteAuditLogData::from_entry(&deleted("role")).unwrap();
    assert_eq!(data.overwrite().target_type(), PermissionTarget::Role);
}

#[test]
fn delete_treats_unknown_type_as_role() {
    let data = OverwriteDeleteAuditLogData::from_entry(&deleted("0")).unwrap();
    assert_eq!(data.overwrite().target_type(), PermissionTarget::Role);
}

#[test]
fn delete_without_id_is_missing_field() {
    let entry = entry(
        ActionType::OverwriteDeleted,
        vec![
            old("type", json!("member")),
            old("allow", json!("8")),
            old("deny", json!("16")),
        ],
    );

    let err = OverwriteDeleteAuditLogData::from_entry(&entry).unwrap_err();
    assert_eq!(
        err.kind(),
        &AuditLogErrorKind::MissingAuditLogField("id".to_string())
    );
}

#[test]
fn missing_fields_reported_in_fixed_order() {
    let entry = entry(
        ActionType::OverwriteDeleted,
        vec![old("id", json!("42")), old("allow", json!("8"))],
    );

    let err = OverwriteDeleteAuditLogData::from_entry(&entry).unwrap_err();
    assert_eq!(
        err.kind(),
        &AuditLogErrorKind::MissingAuditLogField("deny".to_string())
    );
}

#[test]
fn missing_field_wins_over_invalid_value() {
    let entry = entry(
        ActionType::OverwriteDeleted,
        vec![
            old("deny", json!("not a number")),
            old("type", json!("member")),
            old("allow", json!("8")),
        ],
    );

    let err = OverwriteDeleteAuditLogData::from_entry(&entry).unwrap_err();
    assert_eq!(
        err.kind(),
        &AuditLogErrorKind::MissingAuditLogField("id".to_string())
    );
}

#[test]
fn record_without_old_value_counts_as_missing() {
    let entry = entry(
        ActionType::OverwriteDeleted,
        vec![
            new("id", json!("42")),
            old("type", json!("member")),
            old("allow", json!("8")),
            old("deny", json!("16")),
        ],
    );

    let err = OverwriteDeleteAuditLogData::from_entry(&entry).unwrap_err();
    assert_eq!(
        err.kind(),
        &AuditLogErrorKind::MissingAuditLogField("id".to_string())
    );
}

#[test]
fn first_duplicate_record_wins() {
    let entry = entry(
        ActionType::OverwriteDeleted,
        vec![
            old("id", json!("42")),
            old("id", json!("43")),
            old("type", json!("member")),
            old("type", json!("role")),
            old("allow", json!("8")),
            old("deny", json!("16")),
        ],
    );

    let data = OverwriteDeleteAuditLogData::from_entry(&entry).unwrap();
    assert_eq!(data.overwrite().target_id().get(), 42);
    assert_eq!(data.overwrite().target_type(), PermissionTarget::User);
}

#[test]
fn numeric_values_are_accepted() {
    let entry = entry(
        ActionType::OverwriteDeleted,
        vec![
            old("id", json!(42)),
            old("type", json!("member")),
            old("allow", json!(1024)),
            old("deny", json!(2048)),
        ],
    );

    let data = OverwriteDeleteAuditLogData::from_entry(&entry).unwrap();
    let perms = data.overwrite().permissions();
    assert_eq!(perms.get(ChannelPermission::ReadMessages), PermValue::Allow);
    assert_eq!(perms.get(ChannelPermission::SendMessages), PermValue::Deny);
}

#[test]
fn invalid_values_are_rejected() {
    let entry = entry(
        ActionType::OverwriteDeleted,
        vec![
            old("id", json!("42")),
            old("type", json!("member")),
            old("allow", json!(true)),
            old("deny", json!(-1)),
        ],
    );

    let err = OverwriteDeleteAuditLogData::from_entry(&entry).unwrap_err();
    // deny is converted first
    assert!(matches!(
        err.kind(),
        AuditLogErrorKind::InvalidAuditLogValue { field, .. } if field == "deny"
    ));
}

#[test]
fn create_reads_new_values() {
    let entry = entry(
        ActionType::OverwriteCreated,
        vec![
            new("id", json!("7")),
            new("type", json!("role")),
            new("allow", json!("0")),
            new("deny", json!("1024")),
        ],
    );

    let data = OverwriteCreateAuditLogData::from_entry(&entry).unwrap();
    assert_eq!(data.overwrite().target_id().get(), 7);
    assert_eq!(data.overwrite().target_type(), PermissionTarget::Role);
    assert_eq!(
        data.overwrite().permissions().denied(),
        vec![ChannelPermission::ReadMessages]
    );

    // The delete decoder wants old values and finds none.
    assert!(OverwriteDeleteAuditLogData::from_entry(&entry).is_err());
}

#[test]
fn update_reads_masks_and_options() {
    let allow = AuditLogChangeBuilder::default()
        .key("allow")
        .old_value(json!("0"))
        .new_value(json!("2048"))
        .build()
        .unwrap();
    let deny = new("deny", json!("64"));
    let options = AuditLogOptionsBuilder::default()
        .id(Snowflake::new(55))
        .overwrite_type("member".to_string())
        .build()
        .unwrap();
    let entry = AuditLogEntryBuilder::default()
        .id(Snowflake::new(901))
        .action_type(ActionType::OverwriteUpdated)
        .changes(vec![allow, deny])
        .options(options)
        .build()
        .unwrap();

    let data = OverwriteUpdateAuditLogData::from_entry(&entry).unwrap();
    assert_eq!(data.overwrite_target_id(), Snowflake::new(55));
    assert_eq!(data.overwrite_target_type(), PermissionTarget::User);
    assert_eq!(data.before().allow_value(), 0);
    assert_eq!(data.before().deny_value(), 0);
    assert_eq!(data.after().allow_value(), 2048);
    assert_eq!(data.after().deny_value(), 64);
}

#[test]
fn update_without_options_is_rejected() {
    let entry = entry(
        ActionType::OverwriteUpdated,
        vec![new("allow", json!("8"))],
    );

    let err = OverwriteUpdateAuditLogData::from_entry(&entry).unwrap_err();
    assert_eq!(
        err.kind(),
        &AuditLogErrorKind::MissingOptions("options".to_string())
    );
}

#[test]
fn update_without_id_option_is_rejected() {
    let options = AuditLogOptionsBuilder::default()
        .overwrite_type("role".to_string())
        .build()
        .unwrap();
    let entry = AuditLogEntryBuilder::default()
        .id(Snowflake::new(903))
        .action_type(ActionType::OverwriteUpdated)
        .options(options)
        .build()
        .unwrap();

    let err = OverwriteUpdateAuditLogData::from_entry(&entry).unwrap_err();
    assert_eq!(
        err.kind(),
        &AuditLogErrorKind::MissingOptions("id".to_string())
    );
}

#[test]
fn update_without_type_option_is_rejected() {
    let options = AuditLogOptionsBuilder::default()
        .id(Snowflake::new(55))
        .build()
        .unwrap();
    let entry = AuditLogEntryBuilder::default()
        .id(Snowflake::new(902))
        .action_type(ActionType::OverwriteUpdated)
        .options(options)
        .build()
        .unwrap();

    let err = OverwriteUpdateAuditLogData::from_entry(&entry).unwrap_err();
    assert_eq!(
        err.kind(),
        &AuditLogErrorKind::MissingOptions("type".to_string())
    );
}
