//! Command framework errors.

use derive_getters::Getters;

/// Specific command framework error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CommandErrorKind {
    /// A module or command was built without any alias.
    #[display("{} requires at least one alias to be registered", target)]
    EmptyAliasList {
        /// What was being built ("module" or "command")
        target: String,
    },

    /// A module was built with neither commands nor submodules.
    #[display("Tried to build empty module")]
    EmptyModule,

    /// A command was built without a callback.
    #[display("Command '{}' requires a callback to be built", _0)]
    MissingCallback(String),

    /// A remainder or multiple parameter is not the last parameter.
    #[display(
        "Parameter '{}' of command '{}' must be the last parameter to be remainder or multiple",
        parameter,
        command
    )]
    MisplacedParameter {
        /// Command name
        command: String,
        /// Offending parameter name
        parameter: String,
    },

    /// A parameter was built without a name.
    #[display("Parameter of command '{}' requires a name", _0)]
    MissingParameterName(String),

    /// A precondition rejected the invocation.
    #[display("Precondition failed: {}", _0)]
    PreconditionFailed(String),

    /// A command handler reported a failure.
    #[display("Command execution failed: {}", _0)]
    ExecutionFailed(String),
}

/// Command framework error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Command Error: {} at line {} in {}", kind, line, file)]
pub struct CommandError {
    kind: CommandErrorKind,
    line: u32,
    file: &'static str,
}

impl CommandError {
    /// Create a new command error with caller location tracking.
    ///
    /// # Example
    /// ```
    /// use parley_error::{CommandError, CommandErrorKind};
    ///
    /// let err = CommandError::new(CommandErrorKind::EmptyModule);
    /// assert_eq!(err.kind(), &CommandErrorKind::EmptyModule);
    /// ```
    #[track_caller]
    pub fn new(kind: CommandErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for command framework operations.
pub type CommandResult<T> = Result<T, CommandError>;
