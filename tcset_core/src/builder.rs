//! Builder for `CalculatorSession`.
//!
//! Starts from the bench defaults; `build()` rejects defaults that cannot be
//! physical lengths or temperatures.

use crate::config::{CalcCfg, Defaults};
use crate::error::{BuildError, Result};
use crate::input::InputPolicy;
use crate::session::CalculatorSession;
use crate::types::{Apparatus, Selection, Spool};
use crate::units::Unit;

#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    cfg: CalcCfg,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a complete runtime config.
    pub fn from_cfg(cfg: CalcCfg) -> Self {
        Self { cfg }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.cfg.selection = selection;
        self
    }

    /// Select a rig together with its default spool.
    pub fn with_apparatus(mut self, apparatus: Apparatus) -> Self {
        self.cfg.selection = Selection::for_apparatus(apparatus);
        self
    }

    pub fn with_spool(mut self, spool: Spool) -> Self {
        self.cfg.selection.spool = spool;
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.cfg.unit = unit;
        self
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.cfg.defaults = defaults;
        self
    }

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.cfg.policy = policy;
        self
    }

    pub fn build(self) -> Result<CalculatorSession> {
        let d = self.cfg.defaults;
        if !d.shield_in.is_finite() || d.shield_in < 0.0 {
            return Err(BuildError::InvalidDefaults("shield must be finite and >= 0").into());
        }
        if !d.capsule_in.is_finite() || d.capsule_in < 0.0 {
            return Err(BuildError::InvalidDefaults("capsule must be finite and >= 0").into());
        }
        if !d.desired_c.is_finite() {
            return Err(BuildError::InvalidDefaults("desired temperature must be finite").into());
        }
        Ok(CalculatorSession::from_cfg(self.cfg))
    }
}
