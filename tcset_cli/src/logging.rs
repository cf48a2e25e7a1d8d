//! Tracing subscriber setup.
//!
//! Console logs go to stderr so stdout carries only command output. Filter
//! precedence: `RUST_LOG`, then `--log-level`, then `[logging].level`, then
//! "info". An optional JSON-lines file sink comes from `[logging].file`.

use std::path::Path;

use eyre::{Result, eyre};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::FILE_GUARD;

pub fn init(json: bool, cli_level: Option<&str>, cfg: &tcset_config::Logging) -> Result<()> {
    let level = cli_level.or(cfg.level.as_deref()).unwrap_or("info");
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(level).map_err(|e| eyre!("invalid log level {level:?}: {e}"))?,
    };

    let file_layer = match cfg.file.as_deref() {
        Some(path) => {
            let path = Path::new(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| eyre!("logging.file {:?} has no file name", path))?;
            let appender = match cfg.rotation.as_deref() {
                Some("daily") => tracing_appender::rolling::daily(dir, name),
                Some("hourly") => tracing_appender::rolling::hourly(dir, name),
                _ => tracing_appender::rolling::never(dir, name),
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);
    let res = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    res.map_err(|e| eyre!("init logging: {e}"))
}
