//! Audit-log action codes.

use serde::{Deserialize, Serialize};

/// What an audit-log entry records. Serialized as the platform's numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(from = "u8", into = "u8")]
pub enum ActionType {
    /// 1
    GuildUpdated,
    /// 10
    ChannelCreated,
    /// 11
    ChannelUpdated,
    /// 12
    ChannelDeleted,
    /// 13
    OverwriteCreated,
    /// 14
    OverwriteUpdated,
    /// 15
    OverwriteDeleted,
    /// 20
    Kick,
    /// 21
    Prune,
    /// 22
    Ban,
    /// 23
    Unban,
    /// 24
    MemberUpdated,
    /// 25
    MemberRoleUpdated,
    /// 30
    RoleCreated,
    /// 31
    RoleUpdated,
    /// 32
    RoleDeleted,
    /// 40
    InviteCreated,
    /// 41
    InviteUpdated,
    /// 42
    InviteDeleted,
    /// 50
    WebhookCreated,
    /// 51
    WebhookUpdated,
    /// 52
    WebhookDeleted,
    /// 60
    EmojiCreated,
    /// 61
    EmojiUpdated,
    /// 62
    EmojiDeleted,
    /// 72
    MessageDeleted,
    /// Any code this library does not name.
    Unknown(u8),
}

impl From<u8> for ActionType {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::GuildUpdated,
            10 => Self::ChannelCreated,
            11 => Self::ChannelUpdated,
            12 => Self::ChannelDeleted,
            13 => Self::OverwriteCreated,
            14 => Self::OverwriteUpdated,
            15 => Self::OverwriteDeleted,
            20 => Self::Kick,
            21 => Self::Prune,
            22 => Self::Ban,
            23 => Self::Unban,
            24 => Self::MemberUpdated,
            25 => Self::MemberRoleUpdated,
            30 => Self::RoleCreated,
            31 => Self::RoleUpdated,
            32 => Self::RoleDeleted,
            40 => Self::InviteCreated,
            41 => Self::InviteUpdated,
            42 => Self::InviteDeleted,
            50 => Self::WebhookCreated,
            51 => Self::WebhookUpdated,
            52 => Self::WebhookDeleted,
            60 => Self::EmojiCreated,
            61 => Self::EmojiUpdated,
            62 => Self::EmojiDeleted,
            72 => Self::MessageDeleted,
            other => Self::Unknown(other),
        }
    }
}

impl From<ActionType> for u8 {
    fn from(action: ActionType) -> Self {
        match action {
            ActionType::GuildUpdated => 1,
            ActionType::ChannelCreated => 10,
            ActionType::ChannelUpdated => 11,
            ActionType::ChannelDeleted => 12,
            ActionType::OverwriteCreated => 13,
            ActionType::OverwriteUpdated => 14,
            ActionType::OverwriteDeleted => 15,
            ActionType::Kick => 20,
            ActionType::Prune => 21,
            ActionType::Ban => 22,
            ActionType::Unban => 23,
            ActionType::MemberUpdated => 24,
            ActionType::MemberRoleUpdated => 25,
            ActionType::RoleCreated => 30,
            ActionType::RoleUpdated => 31,
            ActionType::RoleDeleted => 32,
            ActionType::InviteCreated => 40,
            ActionType::InviteUpdated => 41,
            ActionType::InviteDeleted => 42,
            ActionType::WebhookCreated => 50,
            ActionType::WebhookUpdated => 51,
            ActionType::WebhookDeleted => 52,
            ActionType::EmojiCreated => 60,
            ActionType::EmojiUpdated => 61,
            ActionType::EmojiDeleted => 62,
            ActionType::MessageDeleted => 72,
            ActionType::Unknown(code) => code,
        }
    }
}
