//! Inch/millimeter measurements.

use crate::util::{round_to, to_fixed};

/// Exact conversion factor.
pub const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    Inches,
    Millimeters,
}

impl Unit {
    /// Short code used on the command line and in config files.
    pub fn code(self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Millimeters => "mm",
        }
    }

    /// Label shown next to input fields.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Inches => "inches",
            Unit::Millimeters => "mm",
        }
    }

    /// Decimal places shown for values in this unit.
    pub fn display_decimals(self) -> usize {
        match self {
            Unit::Inches => 3,
            Unit::Millimeters => 2,
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl core::str::FromStr for Unit {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Unit::Inches),
            "mm" | "millimeter" | "millimeters" => Ok(Unit::Millimeters),
            other => Err(format!("unknown unit {other:?} (expected in|mm)")),
        }
    }
}

#[inline]
pub fn to_millimeters(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

#[inline]
pub fn to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// A length tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: Unit,
}

impl Measurement {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub const fn inches(value: f64) -> Self {
        Self::new(value, Unit::Inches)
    }

    pub const fn millimeters(value: f64) -> Self {
        Self::new(value, Unit::Millimeters)
    }

    pub fn to_millimeters(self) -> f64 {
        match self.unit {
            Unit::Inches => to_millimeters(self.value),
            Unit::Millimeters => self.value,
        }
    }

    pub fn to_inches(self) -> f64 {
        match self.unit {
            Unit::Inches => self.value,
            Unit::Millimeters => to_inches(self.value),
        }
    }

    /// Same length expressed in `unit`, full precision.
    pub fn convert(self, unit: Unit) -> Self {
        let value = match unit {
            Unit::Inches => self.to_inches(),
            Unit::Millimeters => self.to_millimeters(),
        };
        Self { value, unit }
    }

    /// Value rounded to the display precision of its unit.
    pub fn rounded(self) -> Self {
        Self {
            value: round_to(self.value, self.unit.display_decimals()),
            unit: self.unit,
        }
    }

    /// Value formatted at the display precision of its unit, without a label.
    pub fn display_value(self) -> String {
        to_fixed(self.value, self.unit.display_decimals())
    }
}

impl core::fmt::Display for Measurement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.display_value(), self.unit.code())
    }
}
