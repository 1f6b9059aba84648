//! Parameter builder.

use crate::ParameterInfo;
use parley_error::{CommandError, CommandErrorKind, CommandResult};
use tracing::warn;

/// Configures one positional command parameter.
#[derive(Debug, Clone, Default)]
pub struct ParameterBuilder {
    name: String,
    summary: Option<String>,
    default_value: Option<String>,
    is_optional: bool,
    is_remainder: bool,
    is_multiple: bool,
}

impl ParameterBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the parameter name.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Sets the help summary.
    pub fn set_summary(&mut self, summary: impl Into<String>) -> &mut Self {
        self.summary = Some(summary.into());
        self
    }

    /// Makes the parameter optional, falling back to `default_value` when absent.
    pub fn set_default(&mut self, default_value: impl Into<String>) -> &mut Self {
        self.is_optional = true;
        self.default_value = Some(default_value.into());
        self
    }

    /// Marks the parameter optional without a default.
    pub fn set_optional(&mut self, is_optional: bool) -> &mut Self {
        self.is_optional = is_optional;
        self
    }

    /// Consumes the rest of the input as a single value.
    pub fn set_remainder(&mut self, is_remainder: bool) -> &mut Self {
        self.is_remainder = is_remainder;
        self
    }

    /// Accepts any number of values.
    pub fn set_multiple(&mut self, is_multiple: bool) -> &mut Self {
        self.is_multiple = is_multiple;
        self
    }

    /// Current name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the parameter swallows the remaining input.
    pub fn is_remainder(&self) -> bool {
        self.is_remainder
    }

    /// Whether the parameter takes any number of values.
    pub fn is_multiple(&self) -> bool {
        self.is_multiple
    }

    pub(crate) fn build(&self, command: &str) -> CommandResult<ParameterInfo> {
        if self.name.is_empty() {
            warn!(command, "Parameter has no name");
            return Err(CommandError::new(CommandErrorKind::MissingParameterName(
                command.to_string(),
            )));
        }

        Ok(ParameterInfo::new(
            self.name.clone(),
            self.summary.clone(),
            self.default_value.clone(),
            self.is_optional,
            self.is_remainder,
            self.is_multiple,
        ))
    }
}
