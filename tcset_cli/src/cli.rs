//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::OnceLock;

use tcset_core::{Apparatus, Dataset, Spool, Unit};

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

/// Config file read when `--config` is not given; skipped if absent.
pub const DEFAULT_CONFIG: &str = "etc/tcset.toml";

#[derive(Parser, Debug)]
#[command(name = "tcset", version, about = "Thermocouple setpoint calculator")]
pub struct Cli {
    /// Path to config TOML (default: etc/tcset.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results, errors and logs as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace); RUST_LOG takes precedence
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum UnitArg {
    /// Inches
    In,
    /// Millimeters
    Mm,
}

impl From<UnitArg> for Unit {
    fn from(u: UnitArg) -> Self {
        match u {
            UnitArg::In => Unit::Inches,
            UnitArg::Mm => Unit::Millimeters,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SpoolArg {
    First,
    Second,
}

impl From<SpoolArg> for Spool {
    fn from(s: SpoolArg) -> Self {
        match s {
            SpoolArg::First => Spool::First,
            SpoolArg::Second => Spool::Second,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ApparatusArg {
    Rosie,
    Taylor,
}

impl From<ApparatusArg> for Apparatus {
    fn from(a: ApparatusArg) -> Self {
        match a {
            ApparatusArg::Rosie => Apparatus::Rosie,
            ApparatusArg::Taylor => Apparatus::Taylor,
        }
    }
}

/// Built-in dataset names.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum TableArg {
    /// Deviation table, first spool
    First,
    /// Deviation table, second spool
    Second,
    /// Position profile, Taylor rig
    Taylor,
    /// Position profile, Rosie rig
    Rosie,
}

impl From<TableArg> for Dataset {
    fn from(t: TableArg) -> Self {
        match t {
            TableArg::First => Dataset::First,
            TableArg::Second => Dataset::Second,
            TableArg::Taylor => Dataset::Taylor,
            TableArg::Rosie => Dataset::Rosie,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum TableFormatArg {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the controller setpoint for a desired sample temperature
    Calc {
        /// Furnace rig; also selects its default spool
        #[arg(long, value_enum)]
        apparatus: Option<ApparatusArg>,
        /// Calibration spool (overrides the rig default)
        #[arg(long, value_enum)]
        spool: Option<SpoolArg>,
        /// Unit of --shield and --capsule
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,
        /// Shield-to-tube-wall distance
        #[arg(long, value_name = "LEN", allow_hyphen_values = true)]
        shield: Option<String>,
        /// Capsule diameter
        #[arg(long, value_name = "LEN", allow_hyphen_values = true)]
        capsule: Option<String>,
        /// Desired sample temperature (°C)
        #[arg(long, value_name = "CELSIUS", allow_hyphen_values = true)]
        temp: Option<String>,
        /// Reject unreadable numbers and negative lengths instead of reading them as given
        #[arg(long, action = ArgAction::SetTrue)]
        strict: bool,
    },
    /// Convert a length between inches and millimeters
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Unit of VALUE; the result is in the other unit
        #[arg(long, value_enum)]
        from: UnitArg,
    },
    /// Interpolate a built-in table at X
    Lookup {
        #[arg(long, value_enum)]
        table: TableArg,
        /// Query value (°C for deviation tables, mm for position profiles)
        #[arg(allow_hyphen_values = true)]
        x: String,
    },
    /// Print a built-in table
    Table {
        #[arg(long, value_enum)]
        table: TableArg,
        #[arg(long, value_enum, default_value_t = TableFormatArg::Text)]
        format: TableFormatArg,
    },
    /// Render a built-in table as an SVG chart
    Chart {
        #[arg(long, value_enum)]
        table: TableArg,
        /// Output file (default: stdout)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}
