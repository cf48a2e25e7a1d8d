//! Runtime configuration for the calculator session.
//!
//! Separate from the TOML-deserialized config in `tcset_config`; see
//! `conversions` for the mapping.

use crate::input::InputPolicy;
use crate::types::Selection;
use crate::units::Unit;

/// Values filled into empty fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    /// Shield-to-tube-wall distance (inches).
    pub shield_in: f64,
    /// Capsule diameter (inches).
    pub capsule_in: f64,
    /// Desired sample temperature (°C).
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

/// Everything a `CalculatorSession` starts from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalcCfg {
    pub selection: Selection,
    pub unit: Unit,
    pub defaults: Defaults,
    pub policy: InputPolicy,
}
