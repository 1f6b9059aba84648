//! Command callbacks.

use crate::CommandContext;
use async_trait::async_trait;
use parley_error::CommandResult;

/// The body of a command.
///
/// Receives the invocation context and the already-split argument strings.
#[async_trait]
pub trait CommandHandler: Send + Sync + std::fmt::Debug {
    /// Run the command.
    async fn execute(&self, context: &CommandContext, args: &[String]) -> CommandResult<()>;
}
