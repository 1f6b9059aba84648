//! Invocation context handed to preconditions and handlers.

use parley_core::Snowflake;

/// Where and by whom a command was invoked.
///
/// # Example
///
/// ```
/// use parley_commands::CommandContextBuilder;
/// use parley_core::Snowflake;
///
/// let ctx = CommandContextBuilder::default()
///     .channel_id(Snowflake::new(10))
///     .user_id(Snowflake::new(20))
///     .content("!ping")
///     .build()
///     .unwrap();
/// assert!(ctx.guild_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CommandContext {
    /// Guild the message was sent in, `None` for direct messages
    #[builder(default)]
    guild_id: Option<Snowflake>,
    /// Channel the message was sent in
    channel_id: Snowflake,
    /// Author of the message
    user_id: Snowflake,
    /// Raw message content
    #[builder(default)]
    content: String,
}
