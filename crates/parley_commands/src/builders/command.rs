//! Command builder.

use crate::aliases::{compose, fold_case};
use crate::{CommandHandler, CommandInfo, ModuleId, ParameterBuilder, Precondition};
use parley_core::{CommandServiceConfig, RunMode};
use parley_error::{CommandError, CommandErrorKind, CommandResult};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Configures a single command inside a module.
///
/// Created by [`ModuleBuilder::add_command`](crate::ModuleBuilder::add_command).
#[derive(Debug, Clone, Default)]
pub struct CommandBuilder {
    name: Option<String>,
    summary: Option<String>,
    remarks: Option<String>,
    run_mode: RunMode,
    priority: i32,
    aliases: Vec<String>,
    preconditions: Vec<Arc<dyn Precondition>>,
    parameters: Vec<ParameterBuilder>,
    callback: Option<Arc<dyn CommandHandler>>,
}

impl CommandBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets the display name. Defaults to the first alias.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the help summary.
    pub fn set_summary(&mut self, summary: impl Into<String>) -> &mut Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets extended help text.
    pub fn set_remarks(&mut self, remarks: impl Into<String>) -> &mut Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Sets how the handler is scheduled.
    pub fn set_run_mode(&mut self, run_mode: RunMode) -> &mut Self {
        self.run_mode = run_mode;
        self
    }

    /// Sets the tie-break priority among commands sharing an alias.
    pub fn set_priority(&mut self, priority: i32) -> &mut Self {
        self.priority = priority;
        self
    }

    /// Sets the command body.
    pub fn set_callback(&mut self, callback: impl CommandHandler + 'static) -> &mut Self {
        self.callback = Some(Arc::new(callback));
        self
    }

    /// Appends aliases in order. Duplicates are kept.
    pub fn add_aliases<I, S>(&mut self, aliases: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Appends a precondition.
    pub fn add_precondition(&mut self, precondition: impl Precondition + 'static) -> &mut Self {
        self.preconditions.push(Arc::new(precondition));
        self
    }

    /// Appends a parameter configured by `configure`.
    pub fn add_parameter(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut ParameterBuilder),
    ) -> &mut Self {
        let mut parameter = ParameterBuilder::new(name);
        configure(&mut parameter);
        self.parameters.push(parameter);
        self
    }

    /// Display name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Aliases in insertion order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Parameters in insertion order.
    pub fn parameters(&self) -> &[ParameterBuilder] {
        &self.parameters
    }

    /// Preconditions in insertion order.
    pub fn preconditions(&self) -> &[Arc<dyn Precondition>] {
        &self.preconditions
    }

    #[instrument(
        skip(self, module_aliases, inherited, config),
        fields(name = ?self.name, alias_count = self.aliases.len(), parameter_count = self.parameters.len())
    )]
    pub(crate) fn build(
        &self,
        module: ModuleId,
        module_aliases: &[String],
        inherited: &[Arc<dyn Precondition>],
        config: &CommandServiceConfig,
    ) -> CommandResult<CommandInfo> {
        let Some(first_alias) = self.aliases.first() else {
            warn!("Command has no aliases");
            return Err(CommandError::new(CommandErrorKind::EmptyAliasList {
                target: "command".to_string(),
            }));
        };

        let name = self.name.clone().unwrap_or_else(|| first_alias.clone());

        let Some(callback) = self.callback.clone() else {
            warn!(command = %name, "Command has no callback");
            return Err(CommandError::new(CommandErrorKind::MissingCallback(name)));
        };

        let variadic = self
            .parameters
            .iter()
            .position(|p| p.is_remainder() || p.is_multiple());
        if let Some(index) = variadic {
            if index + 1 != self.parameters.len() {
                let parameter = self.parameters[index].name().to_string();
                warn!(command = %name, %parameter, "Variadic parameter is not last");
                return Err(CommandError::new(CommandErrorKind::MisplacedParameter {
                    command: name,
                    parameter,
                }));
            }
        }

        let parameters = self
            .parameters
            .iter()
            .map(|p| p.build(&name))
            .collect::<CommandResult<Vec<_>>>()?;

        let aliases = fold_case(
            compose(Some(module_aliases), &self.aliases, config.separator_char),
            config,
        );
        let run_mode = self.run_mode.resolve(config.default_run_mode);

        debug!(command = %name, ?aliases, %run_mode, "Built command");

        Ok(CommandInfo {
            module,
            name,
            summary: self.summary.clone(),
            remarks: self.remarks.clone(),
            aliases,
            run_mode,
            priority: self.priority,
            module_preconditions: inherited.to_vec(),
            preconditions: self.preconditions.clone(),
            parameters,
            callback,
        })
    }
}
