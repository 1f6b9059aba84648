//! Core data types for the Parley chat client library.
//!
//! This crate provides the value types shared by the command framework and the
//! REST entities, plus configuration loading and tracing setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod overwrite;
mod permissions;
mod run_mode;
mod snowflake;
mod telemetry;

pub use config::{CommandServiceConfig, LogFormat, LoggingConfig, ParleyConfig};
pub use overwrite::{Overwrite, PermissionTarget};
pub use permissions::{ChannelPermission, OverwritePermissions, PermValue};
pub use run_mode::RunMode;
pub use snowflake::Snowflake;
pub use telemetry::init_tracing;
