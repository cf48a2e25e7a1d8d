//! Shield correction: temperature offset between the thermocouple bead and the
//! sample center.

/// Empirical furnace gradient near the sample, °C per mm.
pub const SHIELD_GRADIENT_C_PER_MM: f64 = 8.1392;

/// Distance from the thermocouple to the middle of the capsule (mm).
#[inline]
pub fn tc_to_center_mm(shield_mm: f64, capsule_mm: f64) -> f64 {
    shield_mm + capsule_mm / 2.0
}

/// Correction in °C for the given shield distance and capsule diameter (mm).
///
/// Defined for any input; sign checks belong to the caller's input policy.
#[inline]
pub fn shield_correction(shield_mm: f64, capsule_mm: f64) -> f64 {
    tc_to_center_mm(shield_mm, capsule_mm) * SHIELD_GRADIENT_C_PER_MM
}
