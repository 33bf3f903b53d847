use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tint_core::ColorizerKind;

use super::*;

fn parse(args: &[&str]) -> Result<Invocation, CliError> {
    Config::from_args(args)
}

fn parse_config(args: &[&str]) -> Config {
    match parse(args) {
        Ok(Invocation::Run(config)) => config,
        other => panic!("expected a run invocation for {args:?}, got {other:?}"),
    }
}

#[test]
fn no_args_reads_stdin_with_default_colorizer() {
    assert_eq!(parse_config(&[]), Config::default());
    assert_eq!(Config::default().kind, ColorizerKind::Advanced);
    assert_eq!(Config::default().inputs, vec![Input::Stdin]);
}

#[test]
fn files_and_dash_keep_order() {
    let config = parse_config(&["a.txt", "-", "b.txt"]);
    assert_eq!(
        config.inputs,
        vec![
            Input::File(PathBuf::from("a.txt")),
            Input::Stdin,
            Input::File(PathBuf::from("b.txt")),
        ]
    );
}

#[test]
fn mode_forms() {
    assert_eq!(parse_config(&["--legacy"]).kind, ColorizerKind::Legacy);
    assert_eq!(parse_config(&["--mode=legacy"]).kind, ColorizerKind::Legacy);
    assert_eq!(parse_config(&["--mode", "LEGACY"]).kind, ColorizerKind::Legacy);
    assert_eq!(
        parse_config(&["--legacy", "--mode=advanced"]).kind,
        ColorizerKind::Advanced
    );
}

#[test]
fn help_and_version() {
    assert_eq!(parse(&["-h"]).ok(), Some(Invocation::Help));
    assert_eq!(parse(&["file", "--help"]).ok(), Some(Invocation::Help));
    assert_eq!(parse(&["-V"]).ok(), Some(Invocation::Version));
}

#[test]
fn double_dash_ends_options() {
    let config = parse_config(&["--", "--legacy", "-"]);
    assert_eq!(config.kind, ColorizerKind::Advanced);
    assert_eq!(
        config.inputs,
        vec![
            Input::File(PathBuf::from("--legacy")),
            Input::File(PathBuf::from("-")),
        ]
    );
}

#[test]
fn unknown_option_is_usage_error() {
    let err = parse(&["--rainbow"]).unwrap_err();
    assert!(matches!(err, CliError::UnknownOption(ref o) if o == "--rainbow"));
    assert!(err.is_usage());
    assert_eq!(err.to_string(), "unknown option `--rainbow`");
}

#[test]
fn mode_without_value() {
    let err = parse(&["--mode"]).unwrap_err();
    assert!(matches!(err, CliError::MissingValue("--mode")));
    assert!(err.is_usage());
}

#[test]
fn bad_mode_name() {
    let err = parse(&["--mode=gradient"]).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(
        err.to_string(),
        "unknown colorizer `gradient` (expected `legacy` or `advanced`)"
    );
}

#[test]
fn input_labels() {
    assert_eq!(Input::Stdin.label(), "-");
    assert_eq!(Input::File(PathBuf::from("dir/in.txt")).label(), "dir/in.txt");
}
