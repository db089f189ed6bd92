//! Tests for the translate subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_translate_minimal() {
    match parse(&["fabkit", "translate", "Hello"]).command {
        CliCommand::Translate {
            msgid,
            vars,
            suffix,
            catalog,
        } => {
            assert_eq!(msgid, "Hello");
            assert!(vars.is_empty());
            assert!(suffix.is_none());
            assert!(catalog.is_none());
        }
        _ => panic!("expected Translate"),
    }
}

#[test]
fn cli_parse_translate_vars_and_suffix() {
    match parse(&[
        "fabkit",
        "translate",
        "Hi %(name)s",
        "--var",
        "name=Ada",
        "--var",
        "extra=a=b",
        "--suffix",
        "!",
        "--catalog",
        "de.toml",
    ])
    .command
    {
        CliCommand::Translate {
            msgid,
            vars,
            suffix,
            catalog,
        } => {
            assert_eq!(msgid, "Hi %(name)s");
            assert_eq!(
                vars,
                vec![
                    ("name".to_string(), "Ada".to_string()),
                    ("extra".to_string(), "a=b".to_string()),
                ]
            );
            assert_eq!(suffix.as_deref(), Some("!"));
            assert_eq!(catalog.as_deref(), Some(std::path::Path::new("de.toml")));
        }
        _ => panic!("expected Translate with options"),
    }
}

#[test]
fn cli_parse_translate_rejects_malformed_var() {
    assert!(Cli::try_parse_from(["fabkit", "translate", "x", "--var", "novalue"]).is_err());
    assert!(Cli::try_parse_from(["fabkit", "translate", "x", "--var", "=v"]).is_err());
}
