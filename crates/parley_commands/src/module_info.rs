//! Built module descriptor.

use crate::{CommandInfo, ModuleId, Precondition};
use derive_getters::Getters;
use std::sync::Arc;

/// An immutable, registered module and everything beneath it.
///
/// The tree is owned top-down; `parent` refers back to the enclosing module by id.
#[derive(Debug, Clone, Getters)]
pub struct ModuleInfo {
    /// Identifier assigned by the building service
    pub(crate) id: ModuleId,
    /// Enclosing module, `None` for top-level modules
    pub(crate) parent: Option<ModuleId>,
    /// Display name
    pub(crate) name: String,
    /// Help summary
    pub(crate) summary: Option<String>,
    /// Extended help text
    pub(crate) remarks: Option<String>,
    /// Full aliases, prefixed by every enclosing module alias
    pub(crate) aliases: Vec<String>,
    /// Commands declared directly on this module
    pub(crate) commands: Vec<CommandInfo>,
    /// Nested modules
    pub(crate) submodules: Vec<ModuleInfo>,
    /// Preconditions declared on this module
    pub(crate) preconditions: Vec<Arc<dyn Precondition>>,
}

impl ModuleInfo {
    /// Every command in this module and its submodules, depth-first.
    pub fn all_commands(&self) -> Vec<&CommandInfo> {
        let mut commands = Vec::new();
        self.collect_commands(&mut commands);
        commands
    }

    fn collect_commands<'a>(&'a self, out: &mut Vec<&'a CommandInfo>) {
        out.extend(self.commands.iter());
        for submodule in &self.submodules {
            submodule.collect_commands(out);
        }
    }

    /// Finds this module or a descendant by id.
    pub fn find(&self, id: ModuleId) -> Option<&ModuleInfo> {
        if self.id == id {
            return Some(self);
        }
        self.submodules.iter().find_map(|m| m.find(id))
    }
}
