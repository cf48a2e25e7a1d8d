//! Built-in calibration datasets.
//!
//! Deviation tables map desired sample temperature (°C) to the thermocouple
//! deviation (°C) measured on a calibration spool. Position tables map
//! distance from the capsule base (mm) to measured temperature (°C) from the
//! spinel-growth profiling runs on each rig.

use crate::table::{CalibrationTable, Ordering};

/// Deviation samples for the first (2014) spool.
pub const DEVIATION_FIRST_POINTS: [(f64, f64); 44] = [
    (93.3, 3.2), (100.0, 3.2), (200.0, 3.2), (204.4, 3.2),
    (300.0, 3.4), (315.6, 3.2), (400.0, 3.6), (426.7, 3.7),
    (500.0, 3.9), (537.8, 4.0), (600.0, 4.3), (648.9, 4.6),
    (700.0, 4.7), (760.0, 4.9), (800.0, 5.0), (871.1, 5.3),
    (900.0, 5.4), (982.2, 5.6), (1000.0, 5.7), (1093.3, 5.8),
    (1100.0, 5.8), (1200.0, 5.7), (1204.4, 5.7), (1300.0, 5.7),
    (1315.6, 5.8), (1400.0, 5.2), (1426.7, 5.0), (1500.0, 4.8),
    (1537.8, 4.7), (1600.0, 4.7), (1648.9, 4.8), (1700.0, 5.4),
    (1760.0, 6.2), (1800.0, 7.1), (1871.1, 8.7), (1900.0, 9.1),
    (1982.2, 10.2), (2000.0, 10.2), (2093.3, 10.1), (2100.0, 10.0),
    (2200.0, 7.8), (2204.4, 7.7), (2300.0, 5.7), (2315.6, 5.3),
];

/// Deviation samples for the second (2015) spool.
pub const DEVIATION_SECOND_POINTS: [(f64, f64); 44] = [
    (93.3, 3.2), (100.0, 3.2), (200.0, 3.4), (204.4, 3.4),
    (300.0, 3.7), (315.6, 3.7), (400.0, 4.1), (426.7, 4.2),
    (500.0, 4.7), (537.8, 5.0), (600.0, 5.4), (648.9, 5.8),
    (700.0, 6.1), (760.0, 6.4), (800.0, 6.7), (871.1, 7.2),
    (900.0, 7.4), (982.2, 7.9), (1000.0, 7.9), (1093.3, 8.3),
    (1100.0, 8.4), (1200.0, 8.8), (1204.4, 8.8), (1300.0, 9.0),
    (1315.6, 9.1), (1400.0, 9.0), (1426.7, 9.1), (1500.0, 9.3),
    (1537.8, 9.5), (1600.0, 9.9), (1648.9, 10.2), (1700.0, 11.1),
    (1760.0, 12.2), (1800.0, 13.3), (1871.1, 15.4), (1900.0, 16.0),
    (1982.2, 17.8), (2000.0, 18.0), (2093.3, 18.8), (2100.0, 18.8),
    (2200.0, 18.0), (2204.4, 18.0), (2300.0, 18.4), (2315.6, 18.5),
];

/// Position profile for the Taylor rig.
pub const TAYLOR_POSITION_POINTS: [(f64, f64); 73] = [
    (5.61, 874.8), (5.86, 867.2), (6.11, 879.7), (6.36, 881.6),
    (6.61, 902.9), (6.86, 910.2), (7.11, 909.0), (7.36, 910.2),
    (7.61, 916.2), (7.86, 922.7), (8.11, 929.0), (8.36, 920.7),
    (8.61, 928.1), (8.86, 931.5), (9.61, 937.4), (9.71, 937.8),
    (9.81, 933.9), (9.91, 932.3), (10.01, 933.1), (10.11, 952.0),
    (10.21, 939.3), (10.31, 936.3), (10.41, 934.7), (10.51, 938.5),
    (10.61, 944.9), (10.71, 935.5), (10.81, 934.7), (10.91, 940.0),
    (11.01, 939.3), (11.11, 939.3), (11.21, 946.3), (11.31, 945.6),
    (11.41, 942.9), (11.51, 939.3), (11.61, 943.2), (11.71, 945.6),
    (11.81, 954.9), (11.91, 946.9), (12.01, 945.6), (12.11, 943.5),
    (12.21, 940.0), (12.31, 944.2), (12.41, 944.2), (12.51, 942.2),
    (12.61, 941.8), (12.71, 946.9), (12.81, 940.7), (12.91, 944.9),
    (13.01, 941.4), (13.11, 942.2), (13.21, 942.9), (13.31, 936.3),
    (13.41, 938.5), (13.51, 941.4), (13.61, 942.2), (13.71, 938.5),
    (13.81, 940.7), (13.91, 940.0), (14.01, 937.8), (14.11, 939.3),
    (14.21, 937.8), (14.31, 930.7), (14.41, 931.5), (14.51, 940.0),
    (14.61, 930.7), (14.71, 940.7), (14.81, 937.8), (14.91, 925.4),
    (15.01, 930.7), (15.11, 925.4), (15.21, 925.4), (15.36, 911.9),
    (15.71, 915.7),
];

/// Position profile for the Rosie rig. Most positions were measured twice,
/// so x repeats in places.
pub const ROSIE_POSITION_POINTS: [(f64, f64); 32] = [
    (4.01, 781.0), (4.04, 824.5), (4.97, 841.3), (4.97, 824.5),
    (5.92, 885.1), (5.93, 864.9), (6.81, 914.6), (6.85, 888.4),
    (7.75, 912.4), (7.80, 926.3), (8.68, 926.3), (8.74, 931.5),
    (9.57, 942.2), (9.64, 943.5), (10.51, 948.9), (10.59, 944.9),
    (11.51, 942.2), (11.53, 947.6), (12.46, 928.1), (12.48, 950.1),
    (13.39, 933.1), (13.42, 943.5), (14.35, 924.5), (14.36, 916.7),
    (15.28, 918.8), (15.32, 894.6), (16.19, 881.6), (16.21, 900.3),
    (17.15, 841.3), (17.16, 864.9), (18.12, 824.5), (18.12, 799.8),
];

pub const DEVIATION_FIRST: CalibrationTable<'static> =
    CalibrationTable::from_sorted("first", &DEVIATION_FIRST_POINTS, Ordering::Strict);

pub const DEVIATION_SECOND: CalibrationTable<'static> =
    CalibrationTable::from_sorted("second", &DEVIATION_SECOND_POINTS, Ordering::Strict);

pub const TAYLOR_POSITIONS: CalibrationTable<'static> = CalibrationTable::from_sorted(
    "taylor",
    &TAYLOR_POSITION_POINTS,
    Ordering::NonDecreasing,
);

pub const ROSIE_POSITIONS: CalibrationTable<'static> = CalibrationTable::from_sorted(
    "rosie",
    &ROSIE_POSITION_POINTS,
    Ordering::NonDecreasing,
);

/// The four built-in datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Deviation table, first spool
    First,
    /// Deviation table, second spool
    Second,
    /// Position profile, Taylor rig
    Taylor,
    /// Position profile, Rosie rig
    Rosie,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [
        Dataset::First,
        Dataset::Second,
        Dataset::Taylor,
        Dataset::Rosie,
    ];

    pub fn table(self) -> CalibrationTable<'static> {
        match self {
            Dataset::First => DEVIATION_FIRST,
            Dataset::Second => DEVIATION_SECOND,
            Dataset::Taylor => TAYLOR_POSITIONS,
            Dataset::Rosie => ROSIE_POSITIONS,
        }
    }

    pub fn name(self) -> &'static str {
        self.table().name()
    }

    /// True for temperature→deviation tables, false for position profiles.
    pub fn is_deviation(self) -> bool {
        matches!(self, Dataset::First | Dataset::Second)
    }
}

impl core::fmt::Display for Dataset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Dataset {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Dataset::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown table {s:?} (expected first|second|taylor|rosie)"))
    }
}
