//! Module registration context.

use crate::{CommandInfo, ModuleBuilder, ModuleInfo};
use parley_core::CommandServiceConfig;
use parley_error::CommandResult;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, instrument};

/// Identifies a built module within one [`CommandService`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display,
)]
#[display("module#{}", _0)]
pub struct ModuleId(usize);

/// Builds and holds command modules.
///
/// # Example
///
/// ```
/// use parley_commands::CommandService;
/// use parley_core::CommandServiceConfig;
///
/// let service = CommandService::new(CommandServiceConfig::default());
/// assert!(service.modules().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CommandService {
    config: CommandServiceConfig,
    next_id: AtomicUsize,
    modules: Vec<Arc<ModuleInfo>>,
}

impl CommandService {
    /// Creates an empty service.
    pub fn new(config: CommandServiceConfig) -> Self {
        Self {
            config,
            next_id: AtomicUsize::new(0),
            modules: Vec::new(),
        }
    }

    /// Settings applied to everything this service builds.
    pub fn config(&self) -> &CommandServiceConfig {
        &self.config
    }

    pub(crate) fn next_module_id(&self) -> ModuleId {
        ModuleId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Builds a module without registering it.
    ///
    /// # Errors
    ///
    /// Returns any validation error from the module tree.
    pub fn build_module(&self, builder: &ModuleBuilder) -> CommandResult<ModuleInfo> {
        builder.build(self)
    }

    /// Builds and registers a module.
    ///
    /// # Errors
    ///
    /// Returns any validation error from the module tree; nothing is registered on failure.
    #[instrument(skip(self, builder), fields(module_count = self.modules.len()))]
    pub fn add_module(&mut self, builder: &ModuleBuilder) -> CommandResult<Arc<ModuleInfo>> {
        let module = Arc::new(builder.build(self)?);
        info!(
            id = %module.id(),
            name = %module.name(),
            command_count = module.all_commands().len(),
            "Registered module"
        );
        self.modules.push(Arc::clone(&module));
        Ok(module)
    }

    /// Creates a module with `primary_alias`, configures it, then registers it.
    ///
    /// # Errors
    ///
    /// Returns any validation error from the module tree.
    pub fn create_module(
        &mut self,
        primary_alias: impl Into<String>,
        configure: impl FnOnce(&mut ModuleBuilder),
    ) -> CommandResult<Arc<ModuleInfo>> {
        let mut builder = ModuleBuilder::new();
        builder.add_aliases([primary_alias.into()]);
        configure(&mut builder);
        self.add_module(&builder)
    }

    /// Unregisters a top-level module. Returns whether it was present.
    pub fn remove_module(&mut self, id: ModuleId) -> bool {
        let before = self.modules.len();
        self.modules.retain(|m| *m.id() != id);
        let removed = self.modules.len() != before;
        debug!(%id, removed, "Remove module");
        removed
    }

    /// Registered top-level modules in registration order.
    pub fn modules(&self) -> &[Arc<ModuleInfo>] {
        &self.modules
    }

    /// Finds a registered module or submodule by id.
    pub fn find_module(&self, id: ModuleId) -> Option<&ModuleInfo> {
        self.modules.iter().find_map(|m| m.find(id))
    }

    /// Every registered command, depth-first in registration order.
    pub fn commands(&self) -> Vec<&CommandInfo> {
        self.modules.iter().flat_map(|m| m.all_commands()).collect()
    }
}
