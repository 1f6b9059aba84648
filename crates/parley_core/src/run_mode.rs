//! Command run modes.

use serde::{Deserialize, Serialize};

/// How a command handler is scheduled relative to the gateway event loop.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RunMode {
    /// Use the command service's configured default.
    #[default]
    Default,
    /// Run inline on the event loop.
    Sync,
    /// Spawn onto a separate task.
    Async,
}

impl RunMode {
    /// Resolves `Default` against the service-wide setting.
    ///
    /// ```
    /// use parley_core::RunMode;
    ///
    /// assert_eq!(RunMode::Default.resolve(RunMode::Async), RunMode::Async);
    /// assert_eq!(RunMode::Sync.resolve(RunMode::Async), RunMode::Sync);
    /// ```
    pub fn resolve(self, service_default: RunMode) -> RunMode {
        match self {
            RunMode::Default => service_default,
            explicit => explicit,
        }
    }
}
