//! Command-line interface of the `stepwise` binary.

use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

use crate::config::OptionPath;

#[derive(Debug, Parser)]
#[command(name = "stepwise")]
#[command(about = "Walk through a wizard definition in the terminal")]
#[command(version)]
pub struct Cli {
    /// Wizard definition file (defaults to the user config dir)
    pub definition: Option<PathBuf>,

    /// Trace every transition and write the log next to the cache dir
    #[arg(long)]
    pub debug: bool,

    /// Override an option before start, e.g. `counter.enable=true` (repeatable)
    #[arg(long = "set", value_name = "PATH=JSON", value_parser = parse_assignment)]
    pub set: Vec<OptionAssignment>,

    /// Validate the definition, print the steps and exit
    #[arg(long)]
    pub check: bool,
}

/// One `--set path=value` override.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionAssignment {
    pub path: String,
    pub value: Value,
}

/// Parse `path=value`; values that are not valid JSON are taken as strings.
pub fn parse_assignment(raw: &str) -> Result<OptionAssignment, String> {
    let (path, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected PATH=VALUE, got '{raw}'"))?;
    let path = path.trim();
    path.parse::<OptionPath>().map_err(|e| e.to_string())?;

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
    Ok(OptionAssignment {
        path: path.to_string(),
        value,
    })
}
