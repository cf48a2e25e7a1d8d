//! Final controller setpoint:
//! `setpoint = desired - shield_correction - deviation(spool, desired)`.

use crate::correction::shield_correction;
use crate::error::{CalcError, Result};
use crate::input::InputPolicy;
use crate::types::Spool;
use crate::units::Measurement;

/// One snapshot of the calculator inputs, already parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetpointInputs {
    /// Desired sample temperature (°C)
    pub desired_c: f64,
    /// Shield-to-tube-wall distance
    pub shield: Measurement,
    /// Capsule diameter
    pub capsule: Measurement,
    pub spool: Spool,
}

impl SetpointInputs {
    /// Check the inputs against `policy`. Lenient accepts everything.
    pub fn validate(&self, policy: InputPolicy) -> Result<()> {
        if policy == InputPolicy::Lenient {
            return Ok(());
        }
        if !self.desired_c.is_finite() {
            return Err(CalcError::NonFinite { field: "desired" }.into());
        }
        for (field, m) in [("shield", self.shield), ("capsule", self.capsule)] {
            if !m.value.is_finite() {
                return Err(CalcError::NonFinite { field }.into());
            }
            if m.value < 0.0 {
                return Err(CalcError::NegativeMeasurement {
                    field,
                    value: m.value,
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Full-precision result; rounding is left to `SetpointResult::display`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetpointResult {
    pub desired_c: f64,
    pub shield_correction_c: f64,
    pub deviation_c: f64,
    pub setpoint_c: f64,
}

/// TC deviation for `spool` at `desired_c`, clamped to the table ends.
pub fn deviation(spool: Spool, desired_c: f64) -> f64 {
    spool.deviation_table().interpolate(desired_c)
}

/// Compute the setpoint. Total over all inputs.
pub fn calculate(inputs: &SetpointInputs) -> SetpointResult {
    let shield_mm = inputs.shield.to_millimeters();
    let capsule_mm = inputs.capsule.to_millimeters();
    let shield_correction_c = shield_correction(shield_mm, capsule_mm);
    let deviation_c = deviation(inputs.spool, inputs.desired_c);
    let setpoint_c = inputs.desired_c - shield_correction_c - deviation_c;
    tracing::debug!(
        spool = %inputs.spool,
        desired_c = inputs.desired_c,
        shield_mm,
        capsule_mm,
        shield_correction_c,
        deviation_c,
        setpoint_c,
        "setpoint computed"
    );
    SetpointResult {
        desired_c: inputs.desired_c,
        shield_correction_c,
        deviation_c,
        setpoint_c,
    }
}

/// Validate under `policy`, then compute.
pub fn calculate_checked(inputs: &SetpointInputs, policy: InputPolicy) -> Result<SetpointResult> {
    inputs.validate(policy)?;
    Ok(calculate(inputs))
}
