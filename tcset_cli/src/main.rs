mod calc;
mod cli;
mod error_fmt;
mod logging;
mod render;

use std::path::Path;

use clap::Parser;
use eyre::Result;
use tcset_config::Config;
use tcset_core::InputPolicy;

use crate::calc::CalcArgs;
use crate::cli::{Cli, Commands, DEFAULT_CONFIG, JSON_MODE};

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    if let Err(e) = run(cli) {
        let json = JSON_MODE.get().copied().unwrap_or(false);
        if json {
            eprintln!("{}", error_fmt::format_error_json(&e));
        } else {
            eprintln!("{}", error_fmt::humanize(&e));
        }
        std::process::exit(error_fmt::exit_code_for_error(&e));
    }
}

fn run(cli: Cli) -> Result<()> {
    let _ = color_eyre::install();

    let cfg = load_config(cli.config.as_deref())?;
    logging::init(cli.json, cli.log_level.as_deref(), &cfg.logging)?;
    tracing::debug!(config = ?cli.config, "config loaded");

    let policy = InputPolicy::from(cfg.input.policy);
    match cli.cmd {
        Commands::Calc {
            apparatus,
            spool,
            unit,
            shield,
            capsule,
            temp,
            strict,
        } => {
            let args = CalcArgs {
                apparatus: apparatus.map(Into::into),
                spool: spool.map(Into::into),
                unit: unit.map(Into::into),
                shield,
                capsule,
                temp,
                strict,
            };
            calc::run_calc(&cfg, args, cli.json)
        }
        Commands::Convert { value, from } => calc::run_convert(&value, from.into(), policy, cli.json),
        Commands::Lookup { table, x } => calc::run_lookup(table.into(), &x, policy, cli.json),
        Commands::Table { table, format } => render::run_table(table.into(), format),
        Commands::Chart { table, out } => render::run_chart(table.into(), &cfg.chart, out.as_deref()),
    }
}

/// Explicit `--config` must exist; the default path is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => tcset_config::load_file(p),
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if default.exists() {
                tcset_config::load_file(default)
            } else {
                Ok(Config::default())
            }
        }
    }
}
