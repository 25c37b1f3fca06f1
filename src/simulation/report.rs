use crate::error::ReportError;
use crate::simulation::runner::AggregateResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column order of the results table. Downstream plotting filters on
/// these exact names.
pub const COLUMNS: [&str; 8] = [
    "mana_value",
    "on_color_pips",
    "off_color_pips",
    "on_color_land_count",
    "off_color_land_count",
    "iterations",
    "average_cast_turn",
    "average_mulligan_count",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// JSON for a `.json` extension, CSV otherwise
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Csv,
        }
    }
}

/// Floats always carry a decimal point; whole numbers print as `3.0`
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn csv_row(row: &AggregateResult) -> String {
    [
        row.mana_value.to_string(),
        row.on_color_pips.to_string(),
        row.off_color_pips.to_string(),
        row.on_color_land_count.to_string(),
        row.off_color_land_count.to_string(),
        row.iterations.to_string(),
        row.average_cast_turn.map(format_float).unwrap_or_default(),
        format_float(row.average_mulligan_count),
    ]
    .join(",")
}

pub fn write_csv<W: Write>(rows: &[AggregateResult], mut out: W) -> Result<(), ReportError> {
    writeln!(out, "{}", COLUMNS.join(","))?;
    for row in rows {
        writeln!(out, "{}", csv_row(row))?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(rows: &[AggregateResult], mut out: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Write the table to `path`, picking the format from its extension
pub fn write_results(rows: &[AggregateResult], path: &Path) -> Result<OutputFormat, ReportError> {
    let format = OutputFormat::from_path(path);
    let out = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Csv => write_csv(rows, out)?,
        OutputFormat::Json => write_json(rows, out)?,
    }
    Ok(format)
}
