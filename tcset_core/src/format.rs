//! Display strings for a `SetpointResult`.

use crate::setpoint::SetpointResult;
use crate::util::{number_text, round_half_up, to_fixed};

/// U+2212, used in front of subtracted corrections.
pub const MINUS_SIGN: char = '\u{2212}';
pub const DEGREES_C: &str = "\u{00B0}C";

/// Rounded, human-facing rendering of a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetpointDisplay {
    /// Whole degrees, e.g. `"758"`
    pub setpoint: String,
    /// Echoed desired temperature, e.g. `"800 °C"`
    pub desired: String,
    /// e.g. `"−35.1 °C"`
    pub shield: String,
    /// e.g. `"−6.7 °C"`
    pub deviation: String,
}

impl SetpointResult {
    /// Setpoint rounded to a whole degree, half toward +∞. Saturates for
    /// non-finite or out-of-range values; `display()` handles those.
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded_setpoint(&self) -> i64 {
        round_half_up(self.setpoint_c) as i64
    }

    pub fn display(&self) -> SetpointDisplay {
        SetpointDisplay {
            setpoint: number_text(round_half_up(self.setpoint_c)),
            desired: format!("{} {DEGREES_C}", number_text(self.desired_c)),
            shield: format_correction(self.shield_correction_c),
            deviation: format_correction(self.deviation_c),
        }
    }
}

/// A subtracted correction at one decimal: `"−6.7 °C"`.
pub fn format_correction(value_c: f64) -> String {
    format!("{MINUS_SIGN}{} {DEGREES_C}", to_fixed(value_c, 1))
}

impl core::fmt::Display for SetpointDisplay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Setpoint:   {} {DEGREES_C}", self.setpoint)?;
        writeln!(f, "Desired:    {}", self.desired)?;
        writeln!(f, "Shield:     {}", self.shield)?;
        write!(f, "Deviation:  {}", self.deviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_bench_formatting() {
        let r = SetpointResult {
            desired_c: 800.0,
            shield_correction_c: 35.145_065_6,
            deviation_c: 6.7,
            setpoint_c: 758.154_934_4,
        };
        let d = r.display();
        assert_eq!(d.setpoint, "758");
        assert_eq!(d.desired, "800 \u{00B0}C");
        assert_eq!(d.shield, "\u{2212}35.1 \u{00B0}C");
        assert_eq!(d.deviation, "\u{2212}6.7 \u{00B0}C");
    }

    #[test]
    fn fractional_desired_is_echoed_verbatim() {
        let r = SetpointResult {
            desired_c: 93.3,
            shield_correction_c: 0.0,
            deviation_c: 3.2,
            setpoint_c: 90.1,
        };
        assert_eq!(r.display().desired, "93.3 \u{00B0}C");
        assert_eq!(r.rounded_setpoint(), 90);
    }

    #[test]
    fn infinite_setpoint_is_spelled_out() {
        let r = SetpointResult {
            desired_c: 800.0,
            shield_correction_c: f64::INFINITY,
            deviation_c: 6.7,
            setpoint_c: f64::NEG_INFINITY,
        };
        let d = r.display();
        assert_eq!(d.setpoint, "-Infinity");
        assert_eq!(d.shield, "\u{2212}Infinity \u{00B0}C");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        let r = SetpointResult {
            desired_c: -0.0,
            shield_correction_c: 0.0,
            deviation_c: 0.3,
            setpoint_c: -0.3,
        };
        let d = r.display();
        assert_eq!(d.setpoint, "0");
        assert_eq!(d.desired, "0 \u{00B0}C");
    }

    #[test]
    fn correction_ties_round_up() {
        assert_eq!(format_correction(6.25), "\u{2212}6.3 \u{00B0}C");
        assert_eq!(format_correction(3.25), "\u{2212}3.3 \u{00B0}C");
    }
}
