#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Reference charts (SVG) and tables for the built-in calibration datasets.

pub mod chart;
pub mod table;

pub use chart::{Axis, Chart, ChartLayout, Mark, chart_for};
pub use table::{TableFormat, format_for, render_text, rows};
