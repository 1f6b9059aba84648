//! Module builder.

use crate::aliases::compose;
use crate::{CommandBuilder, CommandService, ModuleId, ModuleInfo, Precondition};
use parley_error::{CommandError, CommandErrorKind, CommandResult};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Collects commands, submodules, preconditions and aliases for one module.
///
/// Setters return the builder for chaining and perform no validation;
/// [`build`](Self::build) validates and freezes the tree.
///
/// # Example
///
/// ```rust,ignore
/// let mut module = ModuleBuilder::new();
/// module
///     .add_aliases(["tag", "t"])
///     .set_summary("Tag management")
///     .add_command(|command| {
///         command.add_aliases(["create"]).set_callback(CreateTag);
///     })
///     .add_submodule(|sub| {
///         sub.add_aliases(["admin"])
///             .add_command(|command| {
///                 command.add_aliases(["purge"]).set_callback(PurgeTags);
///             });
///     });
///
/// let info = module.build(&service)?;
/// assert_eq!(info.name(), "tag");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModuleBuilder {
    name: Option<String>,
    summary: Option<String>,
    remarks: Option<String>,
    commands: Vec<CommandBuilder>,
    submodules: Vec<ModuleBuilder>,
    preconditions: Vec<Arc<dyn Precondition>>,
    aliases: Vec<String>,
}

impl ModuleBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name. Defaults to the first alias at build time.
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

    /// Appends aliases in order. Duplicates are kept.
    pub fn add_aliases<I, S>(&mut self, aliases: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Appends a precondition applying to every command beneath this module.
    pub fn add_precondition(&mut self, precondition: impl Precondition + 'static) -> &mut Self {
        self.preconditions.push(Arc::new(precondition));
        self
    }

    /// Appends a command configured by `configure`.
    ///
    /// The command is added once `configure` returns.
    pub fn add_command(&mut self, configure: impl FnOnce(&mut CommandBuilder)) -> &mut Self {
        let mut command = CommandBuilder::new();
        configure(&mut command);
        self.commands.push(command);
        self
    }

    /// Appends a nested module configured by `configure`.
    pub fn add_submodule(&mut self, configure: impl FnOnce(&mut ModuleBuilder)) -> &mut Self {
        let mut submodule = ModuleBuilder::new();
        configure(&mut submodule);
        self.submodules.push(submodule);
        self
    }

    /// Display name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Help summary, if set.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Extended help text, if set.
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// Aliases in insertion order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Command builders in insertion order.
    pub fn commands(&self) -> &[CommandBuilder] {
        &self.commands
    }

    /// Submodule builders in insertion order.
    pub fn modules(&self) -> &[ModuleBuilder] {
        &self.submodules
    }

    /// Preconditions in insertion order.
    pub fn preconditions(&self) -> &[Arc<dyn Precondition>] {
        &self.preconditions
    }

    /// Validates the module tree and freezes it into a [`ModuleInfo`].
    ///
    /// The builder is left untouched; building again snapshots its current state.
    ///
    /// # Errors
    ///
    /// - `EmptyAliasList` if no alias was added (checked first)
    /// - `EmptyModule` if there are neither commands nor submodules
    /// - any error from a nested command or submodule
    pub fn build(&self, service: &CommandService) -> CommandResult<ModuleInfo> {
        self.build_in(service, None, &[])
    }

    #[instrument(
        skip(self, service, parent, inherited),
        fields(name = ?self.name, alias_count = self.aliases.len(), parent = ?parent.map(|(id, _)| id))
    )]
    fn build_in(
        &self,
        service: &CommandService,
        parent: Option<(ModuleId, &[String])>,
        inherited: &[Arc<dyn Precondition>],
    ) -> CommandResult<ModuleInfo> {
        let Some(first_alias) = self.aliases.first() else {
            warn!("Module has no aliases");
            return Err(CommandError::new(CommandErrorKind::EmptyAliasList {
                target: "module".to_string(),
            }));
        };

        if self.commands.is_empty() && self.submodules.is_empty() {
            warn!(alias = %first_alias, "Module has no commands or submodules");
            return Err(CommandError::new(CommandErrorKind::EmptyModule));
        }

        let name = self.name.clone().unwrap_or_else(|| first_alias.clone());
        let id = service.next_module_id();
        let config = service.config();
        let aliases = compose(parent.map(|(_, a)| a), &self.aliases, config.separator_char);

        let mut chain = inherited.to_vec();
        chain.extend(self.preconditions.iter().cloned());

        let commands = self
            .commands
            .iter()
            .map(|c| c.build(id, &aliases, &chain, config))
            .collect::<CommandResult<Vec<_>>>()?;

        let submodules = self
            .submodules
            .iter()
            .map(|m| m.build_in(service, Some((id, aliases.as_slice())), &chain))
            .collect::<CommandResult<Vec<_>>>()?;

        debug!(
            %id,
            %name,
            command_count = commands.len(),
            submodule_count = submodules.len(),
            "Built module"
        );

        Ok(ModuleInfo {
            id,
            parent: parent.map(|(id, _)| id),
            name,
            summary: self.summary.clone(),
            remarks: self.remarks.clone(),
            aliases,
            commands,
            submodules,
            preconditions: self.preconditions.clone(),
        })
    }
}
