//! gridedit - headless driver for the grid editing engine

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use gridedit::cli::{CliArgs, CliCommand, Replay, Script};
use gridedit::keymap::load_default_keymap;
use gridedit::{GridConfig, TableSnapshot};

fn main() -> Result<()> {
    gridedit::tracing::init();

    let args = CliArgs::parse();
    match args.command {
        CliCommand::Replay {
            table,
            script,
            print_table,
            row_height,
            config,
        } => {
            let table: TableSnapshot = read_json(&table)?;
            let script: Script = read_yaml(&script)?;
            let config = match config {
                Some(path) => GridConfig::load_from(&path),
                None => GridConfig::load(),
            };
            replay(table, &script, config, row_height, print_table)
        }
        CliCommand::Keys { defaults_only } => print_keys(!defaults_only),
    }
}

fn replay(
    table: TableSnapshot,
    script: &Script,
    config: GridConfig,
    row_height: f64,
    print_table: bool,
) -> Result<()> {
    let mut replay = Replay::new(table, config, row_height);
    replay.run(script).context("replaying script")?;
    let (table, events) = replay.finish();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for event in &events {
        writeln!(out, "{}", serde_json::to_string(event)?)?;
    }
    if print_table {
        writeln!(out, "{}", serde_json::to_string_pretty(&table)?)?;
    }
    Ok(())
}

fn print_keys(include_user: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for binding in load_default_keymap(include_user) {
        let when = match &binding.when {
            Some(conditions) => format!("  when {:?}", conditions),
            None => String::new(),
        };
        writeln!(
            out,
            "{:<16} {}{}",
            binding.display_string(),
            binding.command.display_name(),
            when
        )?;
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
