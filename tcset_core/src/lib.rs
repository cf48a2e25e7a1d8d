#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Thermocouple setpoint calculation (UI-agnostic).
//!
//! Given a desired sample temperature, the shield-to-wall distance and the
//! capsule diameter, computes the temperature to command the furnace
//! controller:
//!
//! ```text
//! setpoint = desired - shield_correction(shield_mm, capsule_mm) - deviation(spool, desired)
//! ```
//!
//! ## Architecture
//!
//! - **Tables**: sorted `(x, y)` samples with clamped linear lookup (`table`)
//! - **Datasets**: two spool deviation tables, two rig position profiles (`data`)
//! - **Units**: inch/millimeter measurements (`units`)
//! - **Corrections**: shield correction (`correction`) and the final setpoint (`setpoint`)
//! - **Input**: lenient/strict parsing of form text (`input`)
//! - **Session**: form state with explicit selection, replaces global state (`session`)
//!
//! ```
//! use tcset_core::{Measurement, SetpointInputs, Spool, calculate};
//!
//! let r = calculate(&SetpointInputs {
//!     desired_c: 800.0,
//!     shield: Measurement::inches(0.02),
//!     capsule: Measurement::inches(0.30),
//!     spool: Spool::Second,
//! });
//! assert_eq!(r.rounded_setpoint(), 758);
//! ```

pub mod builder;
pub mod config;
pub mod conversions;
pub mod correction;
pub mod data;
pub mod error;
pub mod format;
pub mod input;
pub mod session;
pub mod setpoint;
pub mod table;
pub mod types;
pub mod units;
pub mod util;

pub use builder::SessionBuilder;
pub use config::{CalcCfg, Defaults};
pub use correction::{SHIELD_GRADIENT_C_PER_MM, shield_correction, tc_to_center_mm};
pub use data::Dataset;
pub use error::{BuildError, CalcError, TableError};
pub use format::SetpointDisplay;
pub use input::{InputPolicy, parse_lenient, parse_number, parse_strict};
pub use session::CalculatorSession;
pub use setpoint::{SetpointInputs, SetpointResult, calculate, calculate_checked, deviation};
pub use table::{CalibrationTable, Ordering, interpolate};
pub use types::{Apparatus, Selection, Spool};
pub use units::{MM_PER_INCH, Measurement, Unit, to_inches, to_millimeters};
pub use util::{number_text, to_fixed};

/// Every built-in table, deviation tables first.
pub fn builtin_tables() -> [CalibrationTable<'static>; 4] {
    Dataset::ALL.map(Dataset::table)
}

/// Look up a built-in table by name (`first`, `second`, `taylor`, `rosie`).
pub fn builtin_table(name: &str) -> Option<CalibrationTable<'static>> {
    name.parse::<Dataset>().ok().map(Dataset::table)
}
