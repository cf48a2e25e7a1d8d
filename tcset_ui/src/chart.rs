//! Reference charts for the calibration datasets, rendered as SVG.
//!
//! Layout: fixed padding around a plot area; data coordinates map linearly
//! onto it with y growing upward.

use core::fmt::{self, Write};

use tcset_core::{CalibrationTable, Dataset};

pub const GRID_COLOR: &str = "#e2e8f0";
pub const LABEL_COLOR: &str = "#4a5568";

/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const PADDING: Padding = Padding {
    top: 20.0,
    right: 20.0,
    bottom: 40.0,
    left: 50.0,
};

/// Canvas size and padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::new(600, 300)
    }
}

impl ChartLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
            padding: PADDING,
        }
    }

    pub fn plot_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }

    /// Horizontal pixel for data `x` on `axis`.
    pub fn x_px(&self, axis: &Axis, x: f64) -> f64 {
        self.padding.left + axis.fraction(x) * self.plot_width()
    }

    /// Vertical pixel for data `y` on `axis` (origin at the bottom).
    pub fn y_px(&self, axis: &Axis, y: f64) -> f64 {
        self.height - self.padding.bottom - axis.fraction(y) * self.plot_height()
    }
}

/// A linear axis with evenly spaced ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub title: &'static str,
}

impl Axis {
    /// Position of `v` along the axis, 0 at `min` and 1 at `max`.
    pub fn fraction(&self, v: f64) -> f64 {
        (v - self.min) / (self.max - self.min)
    }

    /// Tick values from `min` up to and including `max`.
    pub fn ticks(&self) -> Vec<f64> {
        let mut out = Vec::new();
        if self.step.is_nan() || self.step <= 0.0 {
            return out;
        }
        let mut i = 0u32;
        loop {
            let v = self.min + f64::from(i) * self.step;
            if v > self.max + self.step * 1e-9 {
                break;
            }
            out.push(v);
            i += 1;
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    /// Polyline through the samples in order.
    Line { stroke_width: f64 },
    /// One filled dot per sample.
    Dots { radius: f64 },
}

#[derive(Debug, Clone)]
pub struct Chart<'a> {
    pub layout: ChartLayout,
    pub x: Axis,
    pub y: Axis,
    pub table: CalibrationTable<'a>,
    pub color: &'static str,
    pub mark: Mark,
}

/// Series color used for a dataset.
pub fn color(dataset: Dataset) -> &'static str {
    match dataset {
        Dataset::Second => "#3182ce",
        Dataset::First => "#718096",
        Dataset::Taylor => "#2b6cb0",
        Dataset::Rosie => "#38a169",
    }
}

/// Deviation vs. desired temperature: 0..2400 °C by 400, 0..20 °C by 5.
pub fn deviation_chart<'a>(
    table: CalibrationTable<'a>,
    color: &'static str,
    layout: ChartLayout,
) -> Chart<'a> {
    Chart {
        layout,
        x: Axis {
            min: 0.0,
            max: 2400.0,
            step: 400.0,
            title: "Desired Temperature (\u{00B0}C)",
        },
        y: Axis {
            min: 0.0,
            max: 20.0,
            step: 5.0,
            title: "Deviation (\u{00B0}C)",
        },
        table,
        color,
        mark: Mark::Line { stroke_width: 2.0 },
    }
}

/// Temperature vs. position: whole-mm span of the data by 2, 750..1000 °C by 50.
pub fn position_chart<'a>(
    table: CalibrationTable<'a>,
    color: &'static str,
    layout: ChartLayout,
) -> Chart<'a> {
    let (lo, hi) = table.x_range().unwrap_or((0.0, 1.0));
    let min = lo.floor();
    let mut max = hi.ceil();
    if max <= min {
        max = min + 1.0;
    }
    Chart {
        layout,
        x: Axis {
            min,
            max,
            step: 2.0,
            title: "Position from base (mm)",
        },
        y: Axis {
            min: 750.0,
            max: 1000.0,
            step: 50.0,
            title: "Temperature (\u{00B0}C)",
        },
        table,
        color,
        mark: Mark::Dots { radius: 3.0 },
    }
}

/// The chart the reference page shows for `dataset`.
pub fn chart_for(dataset: Dataset, layout: ChartLayout) -> Chart<'static> {
    if dataset.is_deviation() {
        deviation_chart(dataset.table(), color(dataset), layout)
    } else {
        position_chart(dataset.table(), color(dataset), layout)
    }
}

impl Chart<'_> {
    /// Pixel coordinates of every sample.
    pub fn points_px(&self) -> Vec<(f64, f64)> {
        self.table
            .points()
            .iter()
            .map(|&(x, y)| (self.layout.x_px(&self.x, x), self.layout.y_px(&self.y, y)))
            .collect()
    }

    /// Standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    fn write_grid(&self, f: &mut impl Write) -> fmt::Result {
        let l = &self.layout;
        let (top, bottom) = (l.padding.top, l.height - l.padding.bottom);
        let (left, right) = (l.padding.left, l.width - l.padding.right);
        writeln!(f, r#"<g stroke="{GRID_COLOR}" stroke-width="1">"#)?;
        for x in self.x.ticks() {
            let px = l.x_px(&self.x, x);
            writeln!(
                f,
                r#"<line x1="{px:.2}" y1="{top:.2}" x2="{px:.2}" y2="{bottom:.2}"/>"#
            )?;
        }
        for y in self.y.ticks() {
            let py = l.y_px(&self.y, y);
            writeln!(
                f,
                r#"<line x1="{left:.2}" y1="{py:.2}" x2="{right:.2}" y2="{py:.2}"/>"#
            )?;
        }
        writeln!(f, "</g>")
    }

    fn write_series(&self, f: &mut impl Write) -> fmt::Result {
        let color = self.color;
        let pts = self.points_px();
        match self.mark {
            Mark::Line { stroke_width } => {
                let path: Vec<String> = pts.iter().map(|(x, y)| format!("{x:.2},{y:.2}")).collect();
                writeln!(
                    f,
                    r#"<polyline fill="none" stroke="{color}" stroke-width="{stroke_width}" points="{}"/>"#,
                    path.join(" ")
                )
            }
            Mark::Dots { radius } => {
                writeln!(f, r#"<g fill="{color}">"#)?;
                for (x, y) in pts {
                    writeln!(f, r#"<circle cx="{x:.2}" cy="{y:.2}" r="{radius}"/>"#)?;
                }
                writeln!(f, "</g>")
            }
        }
    }

    fn write_labels(&self, f: &mut impl Write) -> fmt::Result {
        let l = &self.layout;
        writeln!(
            f,
            r#"<g fill="{LABEL_COLOR}" font-family="sans-serif" font-size="11">"#
        )?;
        let tick_y = l.height - l.padding.bottom + 16.0;
        for x in self.x.ticks() {
            let px = l.x_px(&self.x, x);
            writeln!(
                f,
                r#"<text x="{px:.2}" y="{tick_y:.2}" text-anchor="middle">{x}</text>"#
            )?;
        }
        writeln!(
            f,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            l.width / 2.0,
            l.height - 5.0,
            self.x.title
        )?;
        let tick_x = l.padding.left - 8.0;
        for y in self.y.ticks() {
            let py = l.y_px(&self.y, y) + 4.0;
            writeln!(
                f,
                r#"<text x="{tick_x:.2}" y="{py:.2}" text-anchor="end">{y}</text>"#
            )?;
        }
        writeln!(
            f,
            r#"<text transform="translate(12 {:.2}) rotate(-90)" text-anchor="middle">{}</text>"#,
            l.height / 2.0,
            self.y.title
        )?;
        writeln!(f, "</g>")
    }
}

impl fmt::Display for Chart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.layout.width, self.layout.height);
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;
        writeln!(f, r##"<rect width="{w}" height="{h}" fill="#fff"/>"##)?;
        self.write_grid(f)?;
        self.write_series(f)?;
        self.write_labels(f)?;
        write!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_maps_axis_ends_to_plot_edges() {
        let layout = ChartLayout::default();
        let chart = chart_for(Dataset::Second, layout);
        assert_eq!(layout.x_px(&chart.x, 0.0), 50.0);
        assert_eq!(layout.x_px(&chart.x, 2400.0), 580.0);
        assert_eq!(layout.y_px(&chart.y, 0.0), 260.0);
        assert_eq!(layout.y_px(&chart.y, 20.0), 20.0);
    }

    #[test]
    fn deviation_ticks() {
        let chart = chart_for(Dataset::First, ChartLayout::default());
        assert_eq!(
            chart.x.ticks(),
            vec![0.0, 400.0, 800.0, 1200.0, 1600.0, 2000.0, 2400.0]
        );
        assert_eq!(chart.y.ticks(), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn position_axis_spans_whole_millimeters() {
        let rosie = chart_for(Dataset::Rosie, ChartLayout::default());
        assert_eq!((rosie.x.min, rosie.x.max), (4.0, 19.0));
        assert_eq!(rosie.x.ticks(), vec![4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0]);
        let taylor = chart_for(Dataset::Taylor, ChartLayout::default());
        assert_eq!((taylor.x.min, taylor.x.max), (5.0, 16.0));
        assert_eq!(taylor.mark, Mark::Dots { radius: 3.0 });
    }

    #[test]
    fn zero_step_has_no_ticks() {
        let axis = Axis {
            min: 0.0,
            max: 1.0,
            step: 0.0,
            title: "",
        };
        assert!(axis.ticks().is_empty());
    }
}
