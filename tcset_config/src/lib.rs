#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the setpoint calculator.
//!
//! - `Config` and its sections are deserialized from TOML and validated.
//! - Every section has defaults, so an empty file (or no file at all) yields
//!   the same start-up state as the bench calculator: Rosie rig, second spool,
//!   inches, 0.02 in shield, 0.30 in capsule, 800 °C.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Apparatus {
    #[default]
    Rosie,
    Taylor,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Spool {
    First,
    Second,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    #[serde(rename = "in", alias = "inches")]
    Inches,
    #[serde(rename = "mm", alias = "millimeters")]
    Millimeters,
}

/// How malformed or physically impossible input is treated.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Unparseable numbers become 0 and negative measurements pass through.
    #[default]
    Lenient,
    /// Unparseable numbers and negative measurements are rejected.
    Strict,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Selection {
    pub apparatus: Apparatus,
    /// Calibration spool. When absent the apparatus default is used
    /// (rosie -> second, taylor -> first).
    pub spool: Option<Spool>,
    pub unit: Unit,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Shield-to-tube-wall distance used when the field is empty (inches)
    pub shield_in: f64,
    /// Capsule diameter used when the field is empty (inches)
    pub capsule_in: f64,
    /// Desired sample temperature at start-up (°C)
    pub desired_c: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            shield_in: 0.02,
            capsule_in: 0.30,
            desired_c: 800.0,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct InputCfg {
    pub policy: InputPolicy,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChartCfg {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

impl Default for ChartCfg {
    fn default() -> Self {
        Self {
            width: 600,
            height: 300,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub selection: Selection,
    pub defaults: Defaults,
    pub input: InputCfg,
    pub chart: ChartCfg,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read, parse and validate a config file.
pub fn load_file(path: &std::path::Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read config {:?}: {}", path, e))?;
    let cfg = load_toml(&text).map_err(|e| eyre::eyre!("parse config {:?}: {}", path, e))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Lowest temperature the calculator accepts as a default (absolute zero).
pub const MIN_DESIRED_C: f64 = -273.15;
/// Highest default temperature; well above the last calibration sample.
pub const MAX_DESIRED_C: f64 = 5000.0;

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Defaults
        if !self.defaults.shield_in.is_finite() || self.defaults.shield_in < 0.0 {
            eyre::bail!("defaults.shield_in must be a finite value >= 0");
        }
        if !self.defaults.capsule_in.is_finite() || self.defaults.capsule_in < 0.0 {
            eyre::bail!("defaults.capsule_in must be a finite value >= 0");
        }
        if !(MIN_DESIRED_C..=MAX_DESIRED_C).contains(&self.defaults.desired_c) {
            eyre::bail!("defaults.desired_c must be in [{MIN_DESIRED_C}, {MAX_DESIRED_C}]");
        }

        // Chart: must leave room inside the 50/20 horizontal and 20/40 vertical padding
        if self.chart.width <= 70 || self.chart.width > 10_000 {
            eyre::bail!("chart.width must be in (70, 10000]");
        }
        if self.chart.height <= 60 || self.chart.height > 10_000 {
            eyre::bail!("chart.height must be in (60, 10000]");
        }

        // Logging
        if let Some(rot) = self.logging.rotation.as_deref()
            && !matches!(rot, "never" | "daily" | "hourly")
        {
            eyre::bail!("logging.rotation must be one of never|daily|hourly, got {rot:?}");
        }

        Ok(())
    }
}
