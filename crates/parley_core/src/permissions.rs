//! Channel permission bits and allow/deny overwrite masks.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Named channel-level permission bits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
#[repr(u64)]
pub enum ChannelPermission {
    /// Create invites to the channel.
    CreateInstantInvite = 1 << 0,
    /// Edit or delete the channel.
    ManageChannel = 1 << 4,
    /// Add new reactions to messages.
    AddReactions = 1 << 6,
    /// See the channel.
    ReadMessages = 1 << 10,
    /// Post messages.
    SendMessages = 1 << 11,
    /// Post text-to-speech messages.
    SendTTSMessages = 1 << 12,
    /// Delete or pin other members' messages.
    ManageMessages = 1 << 13,
    /// Links are auto-embedded.
    EmbedLinks = 1 << 14,
    /// Upload files.
    AttachFiles = 1 << 15,
    /// Read earlier messages.
    ReadMessageHistory = 1 << 16,
    /// Use @everyone and @here.
    MentionEveryone = 1 << 17,
    /// Use emojis from other guilds.
    UseExternalEmojis = 1 << 18,
    /// Join a voice channel.
    Connect = 1 << 20,
    /// Talk in a voice channel.
    Speak = 1 << 21,
    /// Server-mute other members.
    MuteMembers = 1 << 22,
    /// Server-deafen other members.
    DeafenMembers = 1 << 23,
    /// Move members between voice channels.
    MoveMembers = 1 << 24,
    /// Use voice activity detection.
    UseVAD = 1 << 25,
    /// Edit this channel's overwrites.
    ManagePermissions = 1 << 28,
    /// Manage the channel's webhooks.
    ManageWebhooks = 1 << 29,
}

impl ChannelPermission {
    /// The raw bit for this permission.
    pub const fn bit(self) -> u64 {
        self as u64
    }
}

/// Effective state of one permission within an overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum PermValue {
    /// Explicitly granted.
    Allow,
    /// Explicitly revoked.
    Deny,
    /// Falls through to role or guild permissions.
    Inherit,
}

/// An allow/deny pair of permission bitmasks.
///
/// # Examples
///
/// ```
/// use parley_core::{ChannelPermission, OverwritePermissions, PermValue};
///
/// let perms = OverwritePermissions::new(
///     ChannelPermission::SendMessages.bit(),
///     ChannelPermission::AttachFiles.bit(),
/// );
/// assert_eq!(perms.get(ChannelPermission::SendMessages), PermValue::Allow);
/// assert_eq!(perms.get(ChannelPermission::AttachFiles), PermValue::Deny);
/// assert_eq!(perms.get(ChannelPermission::Speak), PermValue::Inherit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OverwritePermissions {
    allow: u64,
    deny: u64,
}

impl OverwritePermissions {
    /// Creates permissions from raw allow and deny masks.
    pub const fn new(allow: u64, deny: u64) -> Self {
        Self { allow, deny }
    }

    /// An overwrite that changes nothing.
    pub const fn inherit_all() -> Self {
        Self::new(0, 0)
    }

    /// Raw allow mask.
    pub const fn allow_value(&self) -> u64 {
        self.allow
    }

    /// Raw deny mask.
    pub const fn deny_value(&self) -> u64 {
        self.deny
    }

    /// State of a single permission. A bit set in both masks reads as denied.
    pub fn get(&self, permission: ChannelPermission) -> PermValue {
        let bit = permission.bit();
        if self.deny & bit != 0 {
            PermValue::Deny
        } else if self.allow & bit != 0 {
            PermValue::Allow
        } else {
            PermValue::Inherit
        }
    }

    /// Named permissions that read as allowed.
    pub fn allowed(&self) -> Vec<ChannelPermission> {
        self.filter(PermValue::Allow)
    }

    /// Named permissions that read as denied.
    pub fn denied(&self) -> Vec<ChannelPermission> {
        self.filter(PermValue::Deny)
    }

    fn filter(&self, value: PermValue) -> Vec<ChannelPermission> {
        ChannelPermission::iter()
            .filter(|p| self.get(*p) == value)
            .collect()
    }
}
