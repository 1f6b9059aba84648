//! Command modules for Parley.
//!
//! Modules are assembled with fluent builders and frozen into immutable
//! descriptors by a [`CommandService`]:
//! - `ModuleBuilder` / `CommandBuilder` / `ParameterBuilder` - mutable configuration
//! - `ModuleInfo` / `CommandInfo` / `ParameterInfo` - built, read-only snapshots
//! - `Precondition` / `CommandHandler` - async hooks attached to modules and commands
//!
//! # Example
//!
//! ```rust,ignore
//! use parley_commands::{CommandService, ModuleBuilder};
//!
//! let mut service = CommandService::default();
//! let module = service.create_module("admin", |module| {
//!     module
//!         .set_summary("Moderation commands")
//!         .add_command(|command| {
//!             command.add_aliases(["ban"]).set_callback(BanHandler);
//!         });
//! })?;
//! assert_eq!(module.commands()[0].aliases(), &["admin ban"]);
//! ```
//!
//! Argument parsing and input dispatch are left to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aliases;
mod builders;
mod command_info;
mod context;
mod handler;
mod module_info;
mod parameter_info;
mod precondition;
mod service;

pub use builders::{CommandBuilder, ModuleBuilder, ParameterBuilder};
pub use command_info::CommandInfo;
pub use context::{CommandContext, CommandContextBuilder, CommandContextBuilderError};
pub use handler::CommandHandler;
pub use module_info::ModuleInfo;
pub use parameter_info::ParameterInfo;
pub use precondition::{Precondition, PreconditionResult};
pub use service::{CommandService, ModuleId};
