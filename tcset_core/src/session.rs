//! Calculator form state.
//!
//! Holds the rig/spool/unit selection and the three input fields as the user
//! typed them. Every change is explicit; `calculate()` recomputes from the
//! current snapshot and caches nothing.

use crate::builder::SessionBuilder;
use crate::config::{CalcCfg, Defaults};
use crate::error::Result;
use crate::input::{InputPolicy, parse_number};
use crate::setpoint::{SetpointInputs, SetpointResult, calculate_checked};
use crate::table::CalibrationTable;
use crate::types::{Apparatus, Selection, Spool};
use crate::units::{Measurement, Unit};

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSession {
    selection: Selection,
    unit: Unit,
    shield: String,
    capsule: String,
    desired: String,
    defaults: Defaults,
    policy: InputPolicy,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::from_cfg(CalcCfg::default())
    }
}

impl CalculatorSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Start-up state: empty length fields are filled with the defaults in
    /// `cfg.unit`, desired temperature with the default temperature.
    pub(crate) fn from_cfg(cfg: CalcCfg) -> Self {
        let mut s = Self {
            selection: cfg.selection,
            unit: cfg.unit,
            shield: String::new(),
            capsule: String::new(),
            desired: cfg.defaults.desired_c.to_string(),
            defaults: cfg.defaults,
            policy: cfg.policy,
        };
        s.fill_defaults();
        s
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn apparatus(&self) -> Apparatus {
        self.selection.apparatus
    }

    pub fn spool(&self) -> Spool {
        self.selection.spool
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn shield_text(&self) -> &str {
        &self.shield
    }

    pub fn capsule_text(&self) -> &str {
        &self.capsule
    }

    pub fn desired_text(&self) -> &str {
        &self.desired
    }

    /// Switch rig; the spool follows the rig's default.
    pub fn set_apparatus(&mut self, apparatus: Apparatus) {
        self.selection = Selection::for_apparatus(apparatus);
        tracing::debug!(%apparatus, spool = %self.selection.spool, "apparatus selected");
    }

    pub fn set_spool(&mut self, spool: Spool) {
        self.selection.spool = spool;
        tracing::debug!(%spool, "spool selected");
    }

    /// Switch display unit.
    ///
    /// - If either length field is empty, both are reset to the defaults
    ///   expressed in `unit`.
    /// - Otherwise, on an actual change, both fields are converted in place
    ///   and rounded to the new unit's display precision. A field the policy
    ///   cannot read is left as typed.
    pub fn set_unit(&mut self, unit: Unit) {
        let old = self.unit;
        self.unit = unit;
        if self.shield.trim().is_empty() || self.capsule.trim().is_empty() {
            self.fill_defaults();
        } else if old != unit {
            self.shield = self.convert_field("shield", &self.shield, old);
            self.capsule = self.convert_field("capsule", &self.capsule, old);
        }
        tracing::debug!(from = %old, to = %unit, shield = %self.shield, capsule = %self.capsule, "unit selected");
    }

    pub fn set_shield(&mut self, text: impl Into<String>) {
        self.shield = text.into();
    }

    pub fn set_capsule(&mut self, text: impl Into<String>) {
        self.capsule = text.into();
    }

    pub fn set_desired(&mut self, text: impl Into<String>) {
        self.desired = text.into();
    }

    /// Deviation table of the selected spool.
    pub fn deviation_table(&self) -> CalibrationTable<'static> {
        self.selection.spool.deviation_table()
    }

    /// Position profile of the selected rig.
    pub fn position_table(&self) -> CalibrationTable<'static> {
        self.selection.apparatus.position_table()
    }

    /// Parse the current fields under the session policy.
    pub fn inputs(&self) -> Result<SetpointInputs> {
        let desired_c = parse_number("desired", &self.desired, self.policy)?;
        let shield = parse_number("shield", &self.shield, self.policy)?;
        let capsule = parse_number("capsule", &self.capsule, self.policy)?;
        Ok(SetpointInputs {
            desired_c,
            shield: Measurement::new(shield, self.unit),
            capsule: Measurement::new(capsule, self.unit),
            spool: self.selection.spool,
        })
    }

    pub fn calculate(&self) -> Result<SetpointResult> {
        calculate_checked(&self.inputs()?, self.policy)
    }

    fn fill_defaults(&mut self) {
        self.shield = default_text(self.defaults.shield_in, self.unit);
        self.capsule = default_text(self.defaults.capsule_in, self.unit);
    }

    fn convert_field(&self, field: &'static str, text: &str, from: Unit) -> String {
        match parse_number(field, text, self.policy) {
            Ok(v) => Measurement::new(v, from).convert(self.unit).display_value(),
            Err(e) => {
                tracing::debug!(field, error = %e, "field left unconverted");
                text.to_string()
            }
        }
    }
}

/// Default length (given in inches) as field text in `unit`: inches as given,
/// millimeters at display precision.
fn default_text(inches: f64, unit: Unit) -> String {
    match unit {
        Unit::Inches => inches.to_string(),
        Unit::Millimeters => Measurement::inches(inches)
            .convert(Unit::Millimeters)
            .display_value(),
    }
}
