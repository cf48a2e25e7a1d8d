//! Rig and spool selection.

use crate::data::{DEVIATION_FIRST, DEVIATION_SECOND, ROSIE_POSITIONS, TAYLOR_POSITIONS};
use crate::table::CalibrationTable;

/// Calibration spool (vintage) whose TC deviation table is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spool {
    /// 2014 spool
    First,
    /// 2015 spool
    Second,
}

impl Spool {
    pub const ALL: [Spool; 2] = [Spool::First, Spool::Second];

    pub fn name(self) -> &'static str {
        match self {
            Spool::First => "first",
            Spool::Second => "second",
        }
    }

    /// Deviation-by-temperature table for this spool.
    pub fn deviation_table(self) -> CalibrationTable<'static> {
        match self {
            Spool::First => DEVIATION_FIRST,
            Spool::Second => DEVIATION_SECOND,
        }
    }
}

impl core::fmt::Display for Spool {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Spool {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Spool::First),
            "second" => Ok(Spool::Second),
            other => Err(format!("unknown spool {other:?} (expected first|second)")),
        }
    }
}

/// Furnace rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Apparatus {
    Rosie,
    Taylor,
}

impl Apparatus {
    pub const ALL: [Apparatus; 2] = [Apparatus::Rosie, Apparatus::Taylor];

    pub fn name(self) -> &'static str {
        match self {
            Apparatus::Rosie => "rosie",
            Apparatus::Taylor => "taylor",
        }
    }

    /// Spool selected when switching to this rig.
    pub fn default_spool(self) -> Spool {
        match self {
            Apparatus::Rosie => Spool::Second,
            Apparatus::Taylor => Spool::First,
        }
    }

    /// Position-by-temperature profile measured on this rig.
    pub fn position_table(self) -> CalibrationTable<'static> {
        match self {
            Apparatus::Rosie => ROSIE_POSITIONS,
            Apparatus::Taylor => TAYLOR_POSITIONS,
        }
    }
}

impl core::fmt::Display for Apparatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Apparatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rosie" => Ok(Apparatus::Rosie),
            "taylor" => Ok(Apparatus::Taylor),
            other => Err(format!("unknown apparatus {other:?} (expected rosie|taylor)")),
        }
    }
}

/// Current rig/spool pick. Passed explicitly into calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub apparatus: Apparatus,
    pub spool: Spool,
}

impl Selection {
    /// Select a rig together with its default spool.
    pub fn for_apparatus(apparatus: Apparatus) -> Self {
        Self {
            apparatus,
            spool: apparatus.default_spool(),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::for_apparatus(Apparatus::Rosie)
    }
}
