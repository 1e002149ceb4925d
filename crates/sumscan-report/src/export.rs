use std::path::Path;

use sumscan_core::errors::{ErrorInfo, ScanError};
use sumscan_core::ResultRow;

fn export_error(err: impl ToString) -> ScanError {
    ScanError::Report(ErrorInfo::new("sumscan_report.export", err.to_string()))
}

/// Builds the CSV records for a ranked result set.
///
/// Header is `index,sum,length,e1..eK` with K the widest subset in the
/// rows (bare `index,sum,length` when there are none); element columns of
/// narrower subsets are padded with empty fields. Every field is a plain
/// integer or empty, so the serialized form never needs quoting.
fn records(rows: &[ResultRow]) -> Vec<Vec<String>> {
    let max_size = rows.iter().map(|row| row.size).max().unwrap_or(0);

    let mut header = vec!["index".to_string(), "sum".to_string(), "length".to_string()];
    for column in 1..=max_size {
        header.push(format!("e{column}"));
    }

    let mut out = Vec::with_capacity(rows.len() + 1);
    out.push(header);
    for row in rows {
        let mut record = vec![
            row.rank.to_string(),
            row.sum.to_string(),
            row.size.to_string(),
        ];
        for value in &row.elements {
            record.push(value.to_string());
        }
        for _ in row.size..max_size {
            record.push(String::new());
        }
        out.push(record);
    }
    out
}

/// Serializes the ranked rows to a CSV string.
pub fn csv_string(rows: &[ResultRow]) -> Result<String, ScanError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for record in records(rows) {
        wtr.write_record(&record).map_err(export_error)?;
    }
    let bytes = wtr.into_inner().map_err(export_error)?;
    String::from_utf8(bytes).map_err(export_error)
}

/// Writes the ranked rows as CSV to `out_path`.
pub fn write_csv(rows: &[ResultRow], out_path: &Path) -> Result<(), ScanError> {
    let mut wtr = csv::Writer::from_path(out_path).map_err(|err| {
        ScanError::Report(
            ErrorInfo::new("sumscan_report.export", err.to_string())
                .with_context("path", out_path.display().to_string()),
        )
    })?;
    for record in records(rows) {
        wtr.write_record(&record).map_err(export_error)?;
    }
    wtr.flush().map_err(export_error)
}
