mod command_test_helpers;

use command_test_helpers::Noop;
use parley_commands::{CommandService, ModuleBuilder};
use parley_core::{CommandServiceConfig, RunMode};
use parley_error::CommandErrorKind;

fn module_with(configure: impl FnOnce(&mut parley_commands::CommandBuilder)) -> ModuleBuilder {
    let mut module = ModuleBuilder::new();
    module.add_aliases(["m"]).add_command(configure);
    module
}

#[test]
fn command_without_alias_is_rejected() {
    let service = CommandService::default();
    let module = module_with(|command| {
        command.set_name("nameless").set_callback(Noop);
    });

    let err = module.build(&service).unwrap_err();
    assert_eq!(
        err.kind(),
        &CommandErrorKind::EmptyAliasList {
            target: "command".to_string()
        }
    );
}

#[test]
fn alias_check_precedes_callback_check() {
    let service = CommandService::default();
    let module = module_with(|_| {});

    let err = module.build(&service).unwrap_err();
    assert!(matches!(err.kind(), CommandErrorKind::EmptyAliasList { .. }));
}

#[test]
fn command_name_defaults_to_first_alias() {
    let service = CommandService::default();
    let module = module_with(|command| {
        command
            .add_aliases(["kick", "k"])
            .set_summary("Kick a member")
            .set_remarks("Requires moderator")
            .set_priority(3)
            .set_callback(Noop);
    });

    let info = module.build(&service).unwrap();
    let command = &info.commands()[0];
    assert_eq!(command.name(), "kick");
    assert_eq!(command.summary().as_deref(), Some("Kick a member"));
    assert_eq!(command.remarks().as_deref(), Some("Requires moderator"));
    assert_eq!(*command.priority(), 3);
    assert_eq!(command.aliases(), &["m kick", "m k"]);
}

#[test]
fn run_mode_resolves_against_service_default() {
    let service = CommandService::new(CommandServiceConfig {
        default_run_mode: RunMode::Async,
        ..CommandServiceConfig::default()
    });
    let mut module = ModuleBuilder::new();
    module
        .add_aliases(["m"])
        .add_command(|command| {
            command.add_aliases(["inherits"]).set_callback(Noop);
        })
        .add_command(|command| {
            command
                .add_aliases(["explicit"])
                .set_run_mode(RunMode::Sync)
                .set_callback(Noop);
        });

    let info = module.build(&service).unwrap();
    assert_eq!(*info.commands()[0].run_mode(), RunMode::Async);
    assert_eq!(*info.commands()[1].run_mode(), RunMode::Sync);
}

#[test]
fn parameters_are_built_in_order() {
    let service = CommandService::default();
    let module = module_with(|command| {
        command
            .add_aliases(["say"])
            .add_parameter("channel", |p| {
                p.set_summary("Where to post").set_default("general");
            })
            .add_parameter("text", |p| {
                p.set_remainder(true);
            })
            .set_callback(Noop);
    });

    let info = module.build(&service).unwrap();
    let parameters = info.commands()[0].parameters();
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[0].name(), "channel");
    assert!(*parameters[0].is_optional());
    assert_eq!(parameters[0].default_value().as_deref(), Some("general"));
    assert_eq!(parameters[1].name(), "text");
    assert!(*parameters[1].is_remainder());
}

#[test]
fn remainder_parameter_must_be_last() {
    let service = CommandService::default();
    let module = module_with(|command| {
        command
            .add_aliases(["say"])
            .add_parameter("text", |p| {
                p.set_remainder(true);
            })
            .add_parameter("channel", |_| {})
            .set_callback(Noop);
    });

    let err = module.build(&service).unwrap_err();
    assert_eq!(
        err.kind(),
        &CommandErrorKind::MisplacedParameter {
            command: "say".to_string(),
            parameter: "text".to_string(),
        }
    );
}

#[test]
fn multiple_parameter_must_be_last() {
    let service = CommandService::default();
    let module = module_with(|command| {
        command
            .add_aliases(["tag"])
            .add_parameter("users", |p| {
                p.set_multiple(true);
            })
            .add_parameter("note", |p| {
                p.set_optional(true);
            })
            .set_callback(Noop);
    });

    let err = module.build(&service).unwrap_err();
    assert!(matches!(
        err.kind(),
        CommandErrorKind::MisplacedParameter { parameter, .. } if parameter == "users"
    ));
}

#[test]
fn parameter_requires_a_name() {
    let service = CommandService::default();
    let module = module_with(|command| {
        command
            .add_aliases(["say"])
            .add_parameter("", |_| {})
            .set_callback(Noop);
    });

    let err = module.build(&service).unwrap_err();
    assert_eq!(
        err.kind(),
        &CommandErrorKind::MissingParameterName("say".to_string())
    );
}

#[test]
fn case_sensitive_service_keeps_alias_case() {
    let service = CommandService::new(CommandServiceConfig {
        case_sensitive: true,
        separator_char: '/',
        ..CommandServiceConfig::default()
    });
    let mut module = ModuleBuilder::new();
    module.add_aliases(["Mod"]).add_command(|command| {
        command.add_aliases(["Ban"]).set_callback(Noop);
    });

    let info = module.build(&service).unwrap();
    assert_eq!(info.commands()[0].aliases(), &["Mod/Ban"]);
}
