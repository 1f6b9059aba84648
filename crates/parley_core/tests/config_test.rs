use parley_core::{LogFormat, ParleyConfig, RunMode};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn bundled_matches_defaults() {
    let config = ParleyConfig::bundled().unwrap();
    assert_eq!(config, ParleyConfig::default());
    assert_eq!(config.commands.separator_char, ' ');
    assert!(!config.commands.case_sensitive);
    assert_eq!(config.commands.default_run_mode, RunMode::Sync);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn from_file_overrides_fields() {
    let file = write_config(
        r#"
[commands]
separator_char = "."
case_sensitive = true
default_run_mode = "async"

[logging]
format = "json"
"#,
    );

    let config = ParleyConfig::from_file(file.path()).unwrap();
    assert_eq!(config.commands.separator_char, '.');
    assert!(config.commands.case_sensitive);
    assert_eq!(config.commands.default_run_mode, RunMode::Async);
    assert_eq!(config.logging.format, LogFormat::Json);
    // Unset fields keep their defaults.
    assert_eq!(config.logging.level, "info");
}

#[test]
fn from_file_rejects_default_run_mode() {
    let file = write_config(
        r#"
[commands]
default_run_mode = "default"
"#,
    );
    assert!(ParleyConfig::from_file(file.path()).is_err());
}

#[test]
fn from_file_rejects_alphanumeric_separator() {
    let file = write_config(
        r#"
[commands]
separator_char = "x"
"#,
    );
    assert!(ParleyConfig::from_file(file.path()).is_err());
}

#[test]
fn from_file_reports_missing_file() {
    let err = ParleyConfig::from_file("/nonexistent/parley.toml").unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn run_mode_resolves_default() {
    assert_eq!(RunMode::Default.resolve(RunMode::Sync), RunMode::Sync);
    assert_eq!(RunMode::Async.resolve(RunMode::Sync), RunMode::Async);
}
