//! Reference table export and chart output.

use std::path::Path;

use eyre::{Result, WrapErr};
use serde_json::json;
use tcset_core::Dataset;
use tcset_ui::{ChartLayout, chart_for};

use crate::cli::TableFormatArg;

pub fn run_table(dataset: Dataset, format: TableFormatArg) -> Result<()> {
    match format {
        TableFormatArg::Text => print!("{}", tcset_ui::render_text(dataset)),
        TableFormatArg::Csv => write_csv(dataset, std::io::stdout())?,
        TableFormatArg::Json => println!("{}", table_json(dataset)),
    }
    Ok(())
}

/// Header row plus one formatted row per sample.
pub fn write_csv(dataset: Dataset, out: impl std::io::Write) -> Result<()> {
    let fmt = tcset_ui::format_for(dataset);
    let mut w = csv::Writer::from_writer(out);
    w.write_record([fmt.x_header, fmt.y_header])?;
    for row in tcset_ui::rows(dataset) {
        w.write_record(&row)?;
    }
    w.flush().wrap_err("flush CSV output")?;
    Ok(())
}

/// Raw (unrounded) samples with column names.
pub fn table_json(dataset: Dataset) -> serde_json::Value {
    let fmt = tcset_ui::format_for(dataset);
    let rows: Vec<[f64; 2]> = dataset
        .table()
        .points()
        .iter()
        .map(|&(x, y)| [x, y])
        .collect();
    json!({
        "table": dataset.name(),
        "columns": [fmt.x_header, fmt.y_header],
        "rows": rows,
    })
}

pub fn run_chart(dataset: Dataset, chart_cfg: &tcset_config::ChartCfg, out: Option<&Path>) -> Result<()> {
    let layout = ChartLayout::new(chart_cfg.width, chart_cfg.height);
    let svg = chart_for(dataset, layout).to_svg();
    match out {
        Some(path) => {
            std::fs::write(path, svg.as_bytes())
                .wrap_err_with(|| format!("write chart {}", path.display()))?;
            tracing::info!(table = dataset.name(), path = %path.display(), "chart written");
        }
        None => println!("{svg}"),
    }
    Ok(())
}
