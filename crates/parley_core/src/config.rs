//! Configuration for the command service and logging.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from parley.toml)
//! - `~/.config/parley/parley.toml`
//! - `./parley.toml`

use crate::RunMode;
use config::{Config, File, FileFormat};
use parley_error::{ConfigError, ParleyError, ParleyResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../parley.toml");

/// Settings threaded into every module and command the service builds.
///
/// ```toml
/// [commands]
/// separator_char = " "
/// case_sensitive = false
/// default_run_mode = "sync"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandServiceConfig {
    /// Joins a parent alias to a child alias.
    #[serde(default = "default_separator")]
    pub separator_char: char,

    /// When false, built command aliases are lower-cased.
    #[serde(default)]
    pub case_sensitive: bool,

    /// Run mode for commands left at `RunMode::Default`.
    #[serde(default = "default_run_mode")]
    pub default_run_mode: RunMode,
}

fn default_separator() -> char {
    ' '
}

fn default_run_mode() -> RunMode {
    RunMode::Sync
}

impl Default for CommandServiceConfig {
    fn default() -> Self {
        Self {
            separator_char: default_separator(),
            case_sensitive: false,
            default_run_mode: default_run_mode(),
        }
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Line format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Top-level Parley configuration.
///
/// # Example
///
/// ```no_run
/// use parley_core::ParleyConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ParleyConfig::load()?;
/// println!("separator: {:?}", config.commands.separator_char);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParleyConfig {
    /// Command service settings
    #[serde(default)]
    pub commands: CommandServiceConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ParleyConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ParleyResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ParleyError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ParleyError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load only the defaults bundled with the library.
    pub fn bundled() -> ParleyResult<Self> {
        Self::finish(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped when absent.
    #[instrument]
    pub fn load() -> ParleyResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/parley/parley.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("parley").required(false));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ParleyResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                ParleyError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ParleyError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the command service cannot work with.
    ///
    /// # Errors
    ///
    /// Returns an error if the default run mode is `default` or the
    /// separator is alphanumeric.
    pub fn validate(&self) -> ParleyResult<()> {
        if self.commands.default_run_mode == RunMode::Default {
            return Err(ConfigError::new(
                "commands.default_run_mode must be 'sync' or 'async'",
            )
            .into());
        }
        if self.commands.separator_char.is_alphanumeric() {
            return Err(ConfigError::new(format!(
                "commands.separator_char must not be alphanumeric, got {:?}",
                self.commands.separator_char
            ))
            .into());
        }
        Ok(())
    }
}
