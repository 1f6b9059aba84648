//! Shared handlers and preconditions for command framework tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parley_commands::{
    CommandContext, CommandContextBuilder, CommandHandler, CommandInfo, Precondition,
    PreconditionResult,
};
use parley_core::Snowflake;
use parley_error::{CommandError, CommandErrorKind, CommandResult};
use std::sync::{Arc, Mutex};

/// Handler that does nothing.
#[derive(Debug)]
pub struct Noop;

#[async_trait]
impl CommandHandler for Noop {
    async fn execute(&self, _context: &CommandContext, _args: &[String]) -> CommandResult<()> {
        Ok(())
    }
}

/// Handler that records the arguments it was called with.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
}

#[async_trait]
impl CommandHandler for Recorder {
    async fn execute(&self, _context: &CommandContext, args: &[String]) -> CommandResult<()> {
        self.calls.lock().unwrap().push(args.to_vec());
        Ok(())
    }
}

/// Handler that always fails.
#[derive(Debug)]
pub struct Failing;

#[async_trait]
impl CommandHandler for Failing {
    async fn execute(&self, _context: &CommandContext, _args: &[String]) -> CommandResult<()> {
        Err(CommandError::new(CommandErrorKind::ExecutionFailed(
            "boom".to_string(),
        )))
    }
}

/// Precondition that only passes inside a guild.
#[derive(Debug)]
pub struct RequireGuild;

#[async_trait]
impl Precondition for RequireGuild {
    async fn check(&self, context: &CommandContext, _command: &CommandInfo) -> PreconditionResult {
        if context.guild_id().is_some() {
            PreconditionResult::Success
        } else {
            PreconditionResult::failure("guild only")
        }
    }
}

/// Precondition that appends its label to a shared log and passes.
#[derive(Debug, Clone)]
pub struct Trace {
    pub label: &'static str,
    pub log: Arc<Mutex<Vec<&'static str>>>,
}

#[async_trait]
impl Precondition for Trace {
    async fn check(&self, _context: &CommandContext, _command: &CommandInfo) -> PreconditionResult {
        self.log.lock().unwrap().push(self.label);
        PreconditionResult::Success
    }
}

/// Context for a message in a guild channel.
pub fn guild_context() -> CommandContext {
    CommandContextBuilder::default()
        .guild_id(Snowflake::new(1))
        .channel_id(Snowflake::new(2))
        .user_id(Snowflake::new(3))
        .content("!cmd")
        .build()
        .unwrap()
}

/// Context for a direct message.
pub fn dm_context() -> CommandContext {
    CommandContextBuilder::default()
        .channel_id(Snowflake::new(2))
        .user_id(Snowflake::new(3))
        .build()
        .unwrap()
}
