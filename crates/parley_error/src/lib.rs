//! Error types for the Parley library.
//!
//! This crate provides the foundation error types used throughout the Parley workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use parley_error::{CommandError, CommandErrorKind, ParleyResult};
//!
//! fn register() -> ParleyResult<()> {
//!     Err(CommandError::new(CommandErrorKind::EmptyModule))?
//! }
//!
//! match register() {
//!     Ok(()) => println!("registered"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audit_log;
mod command;
mod config;
mod error;
mod json;

pub use audit_log::{AuditLogError, AuditLogErrorKind, AuditLogResult};
pub use command::{CommandError, CommandErrorKind, CommandResult};
pub use config::ConfigError;
pub use error::{ParleyError, ParleyErrorKind, ParleyResult};
pub use json::JsonError;
