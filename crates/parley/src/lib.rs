//! Parley - chat platform command framework and REST audit logs
//!
//! # Features
//!
//! - **Command modules**: fluent builders frozen into immutable, alias-resolved module trees
//! - **Preconditions**: async checks inherited down the module tree
//! - **Audit logs**: typed decoding of permission overwrite entries
//! - **Configuration**: bundled defaults with home and working-directory overrides
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use parley::{CommandService, ParleyConfig, init_tracing};
//!
//! let config = ParleyConfig::load()?;
//! init_tracing(&config.logging)?;
//!
//! let mut service = CommandService::new(config.commands);
//! service.create_module("tags", |module| {
//!     module.add_command(|command| {
//!         command.add_aliases(["list"]).set_callback(ListTags);
//!     });
//! })?;
//! ```
//!
//! # Architecture
//!
//! - `parley_error` - Error types
//! - `parley_core` - Snowflakes, permission overwrites, configuration, tracing
//! - `parley_commands` - Module/command builders and the command service
//! - `parley_rest` - Audit-log models and decoders
//!
//! This crate re-exports everything for convenience.

pub use parley_commands::*;
pub use parley_core::*;
pub use parley_error::*;
pub use parley_rest::*;
