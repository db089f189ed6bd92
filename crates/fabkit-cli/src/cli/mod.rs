//! CLI for the fabkit helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fabkit_core::config;
use std::path::PathBuf;

use commands::{run_check_redirect, run_column, run_translate};

/// Top-level CLI for fabkit.
#[derive(Debug, Parser)]
#[command(name = "fabkit")]
#[command(about = "fabkit: redirect, column and translation helpers", long_about = None)]
pub struct Cli {
    /// Read config from this file instead of ~/.config/fabkit/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether a URL is a safe redirect target and print where a redirect would land.
    CheckRedirect {
        /// Redirect target to validate.
        url: String,
        /// Host URL of the current request (e.g. http://localhost:5000/). Overrides config.
        #[arg(long, value_name = "URL")]
        host_url: Option<String>,
        /// Safe host glob pattern; repeatable. Replaces configured patterns.
        #[arg(long = "allow", value_name = "PATTERN")]
        allow: Vec<String>,
    },

    /// Split a dotted column identifier into relation and leaf.
    Column {
        /// Identifier such as `user.name`.
        ident: String,
    },

    /// Render a message through the catalog, lazily formatted.
    Translate {
        /// Message id.
        msgid: String,
        /// Substitution variable; repeatable.
        #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,
        /// Text the formatter appends to the message id before lookup.
        #[arg(long, value_name = "TEXT")]
        suffix: Option<String>,
        /// Message catalog (.toml or .json). Overrides config.
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got {s:?}")),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::CheckRedirect {
                url,
                host_url,
                allow,
            } => run_check_redirect(&cfg, &url, host_url.as_deref(), allow)?,
            CliCommand::Column { ident } => run_column(&ident),
            CliCommand::Translate {
                msgid,
                vars,
                suffix,
                catalog,
            } => run_translate(&cfg, &msgid, vars, suffix, catalog.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
