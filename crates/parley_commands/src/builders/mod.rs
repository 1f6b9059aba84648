//! Mutable builders for modules, commands and parameters.

mod command;
mod module;
mod parameter;

pub use command::CommandBuilder;
pub use module::ModuleBuilder;
pub use parameter::ParameterBuilder;
