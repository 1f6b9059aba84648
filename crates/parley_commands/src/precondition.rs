//! Preconditions gating command invocation.

use crate::{CommandContext, CommandInfo};
use async_trait::async_trait;

/// Outcome of a precondition check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreconditionResult {
    /// The invocation may proceed.
    Success,
    /// The invocation is rejected with a user-facing reason.
    Failure(String),
}

impl PreconditionResult {
    /// Builds a failure from any displayable reason.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure(reason.into())
    }

    /// Whether the check passed.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// A check attached to a module or command.
///
/// Module preconditions apply to every command beneath the module, outermost first.
#[async_trait]
pub trait Precondition: Send + Sync + std::fmt::Debug {
    /// Decide whether `command` may run in `context`.
    async fn check(&self, context: &CommandContext, command: &CommandInfo) -> PreconditionResult;
}
