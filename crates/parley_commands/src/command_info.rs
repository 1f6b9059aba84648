//! Built command descriptor.

use crate::{
    CommandContext, CommandHandler, ModuleId, ParameterInfo, Precondition, PreconditionResult,
};
use derive_getters::Getters;
use parley_core::RunMode;
use parley_error::{CommandError, CommandErrorKind, CommandResult};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// An immutable, registered command.
#[derive(Debug, Clone, Getters)]
pub struct CommandInfo {
    /// Owning module
    pub(crate) module: ModuleId,
    /// Display name
    pub(crate) name: String,
    /// Help summary
    pub(crate) summary: Option<String>,
    /// Extended help text
    pub(crate) remarks: Option<String>,
    /// Full aliases, prefixed by every owning module alias
    pub(crate) aliases: Vec<String>,
    /// Resolved run mode, never `RunMode::Default`
    pub(crate) run_mode: RunMode,
    /// Tie-break priority
    pub(crate) priority: i32,
    /// Preconditions inherited from the module chain, outermost first
    pub(crate) module_preconditions: Vec<Arc<dyn Precondition>>,
    /// Preconditions declared on the command itself
    pub(crate) preconditions: Vec<Arc<dyn Precondition>>,
    /// Positional parameters
    pub(crate) parameters: Vec<ParameterInfo>,
    #[getter(skip)]
    pub(crate) callback: Arc<dyn CommandHandler>,
}

impl CommandInfo {
    /// Runs module preconditions, then the command's own, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionFailed` carrying the failing check's reason.
    #[instrument(skip(self, context), fields(command = %self.name))]
    pub async fn check_preconditions(&self, context: &CommandContext) -> CommandResult<()> {
        for precondition in self.module_preconditions.iter().chain(&self.preconditions) {
            if let PreconditionResult::Failure(reason) = precondition.check(context, self).await {
                warn!(?precondition, %reason, "Precondition failed");
                return Err(CommandError::new(CommandErrorKind::PreconditionFailed(
                    reason,
                )));
            }
            debug!(?precondition, "Precondition passed");
        }
        Ok(())
    }

    /// Checks preconditions and runs the handler with pre-split arguments.
    ///
    /// # Errors
    ///
    /// Returns the first precondition failure or the handler's error.
    #[instrument(skip(self, context, args), fields(command = %self.name, arg_count = args.len()))]
    pub async fn invoke(&self, context: &CommandContext, args: &[String]) -> CommandResult<()> {
        self.check_preconditions(context).await?;
        info!("Executing command");
        self.callback.execute(context, args).await
    }
}
