//! Reference tables for the calibration datasets.

use tcset_core::{Dataset, to_fixed};

/// Column headers and decimal places for one dataset family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    pub x_header: &'static str,
    pub y_header: &'static str,
    pub x_decimals: usize,
    pub y_decimals: usize,
}

pub const DEVIATION_FORMAT: TableFormat = TableFormat {
    x_header: "Desired (\u{00B0}C)",
    y_header: "Deviation (\u{00B0}C)",
    x_decimals: 1,
    y_decimals: 1,
};

pub const POSITION_FORMAT: TableFormat = TableFormat {
    x_header: "Position (mm)",
    y_header: "Temperature (\u{00B0}C)",
    x_decimals: 2,
    y_decimals: 1,
};

pub fn format_for(dataset: Dataset) -> TableFormat {
    if dataset.is_deviation() {
        DEVIATION_FORMAT
    } else {
        POSITION_FORMAT
    }
}

/// Formatted cells, one `[x, y]` pair per sample.
pub fn rows(dataset: Dataset) -> Vec<[String; 2]> {
    let fmt = format_for(dataset);
    dataset
        .table()
        .points()
        .iter()
        .map(|&(x, y)| {
            [
                to_fixed(x, fmt.x_decimals),
                to_fixed(y, fmt.y_decimals),
            ]
        })
        .collect()
}

/// Plain-text table with right-aligned columns.
pub fn render_text(dataset: Dataset) -> String {
    let fmt = format_for(dataset);
    let rows = rows(dataset);
    let w0 = rows
        .iter()
        .map(|r| r[0].chars().count())
        .chain([fmt.x_header.chars().count()])
        .max()
        .unwrap_or(0);
    let w1 = rows
        .iter()
        .map(|r| r[1].chars().count())
        .chain([fmt.y_header.chars().count()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:>w0$}  {:>w1$}\n", fmt.x_header, fmt.y_header));
    out.push_str(&format!("{}  {}\n", "-".repeat(w0), "-".repeat(w1)));
    for [x, y] in &rows {
        out.push_str(&format!("{x:>w0$}  {y:>w1$}\n"));
    }
    out
}
