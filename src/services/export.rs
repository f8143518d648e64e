//! CSV output for the indicator table and the signal table.

use crate::error::ExportError;
use crate::models::indicators::IndicatorTable;
use crate::models::signal::{SignalColumn, SignalTable, SignalValue};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Wide layout: a `row` index column, then one `{symbol}_{indicator}` column
/// per series. Shorter series and missing values are written as empty cells.
pub fn write_indicator_table<W: Write>(writer: W, table: &IndicatorTable) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);
    let columns: Vec<(String, &[f64])> = table.columns().collect();

    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push("row".to_string());
    header.extend(columns.iter().map(|(label, _)| label.clone()));
    writer.write_record(&header)?;

    for i in 0..table.row_count() {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(i.to_string());
        for (_, values) in &columns {
            record.push(match values.get(i) {
                Some(v) if !v.is_nan() => v.to_string(),
                _ => String::new(),
            });
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn cell_text(value: SignalValue) -> String {
    match value {
        SignalValue::Number(v) if v.is_nan() => String::new(),
        other => other.to_string(),
    }
}

/// One row per symbol: `Symbol` followed by every [`SignalColumn`].
pub fn write_signal_table<W: Write>(writer: W, table: &SignalTable) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Symbol"];
    header.extend(SignalColumn::ALL.iter().map(SignalColumn::as_str));
    writer.write_record(&header)?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(SignalColumn::COUNT + 1);
        record.push(row.symbol.clone());
        record.extend(row.cells().map(|(_, value)| cell_text(value)));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_indicator_csv(path: &Path, table: &IndicatorTable) -> Result<(), ExportError> {
    write_indicator_table(File::create(path)?, table)
}

pub fn write_signal_csv(path: &Path, table: &SignalTable) -> Result<(), ExportError> {
    write_signal_table(File::create(path)?, table)
}
