use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Read the first column of an input file as an ordered sequence of raw
/// cell strings, one entry per row.
///
/// Blank cells are kept as empty strings so downstream filtering sees the
/// column exactly as laid out in the file. The format is chosen by file
/// extension: `.xlsx` workbooks or `.csv` files.
pub fn read_id_column(path: &Path) -> Result<Vec<String>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("xlsx") => read_xlsx_column(path),
        Some("csv") => read_csv_column(path),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Read the first column of the first sheet of an xlsx workbook.
pub fn read_xlsx_column(path: &Path) -> Result<Vec<String>> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|source| IngestError::OpenWorkbook {
            path: path.to_path_buf(),
            source,
        })?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::NoSheets {
            path: path.to_path_buf(),
        })?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| IngestError::ReadSheet {
            path: path.to_path_buf(),
            sheet: sheet.clone(),
            source,
        })?;
    if range.is_empty() || range.width() == 0 {
        return Err(IngestError::EmptyColumn {
            path: path.to_path_buf(),
        });
    }
    let values: Vec<String> = range
        .rows()
        .map(|row| row.first().map(cell_to_string).unwrap_or_default())
        .collect();
    debug!(
        path = %path.display(),
        sheet = %sheet,
        row_count = values.len(),
        "xlsx column read"
    );
    Ok(values)
}

/// Read the first field of every record in a csv file.
pub fn read_csv_column(path: &Path) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::ReadCsv {
            path: path.to_path_buf(),
            source,
        })?;
    let mut values = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::ReadCsv {
            path: path.to_path_buf(),
            source,
        })?;
        let value = record.get(0).map(normalize_cell).unwrap_or_default();
        values.push(value);
    }
    if values.is_empty() {
        return Err(IngestError::EmptyColumn {
            path: path.to_path_buf(),
        });
    }
    debug!(
        path = %path.display(),
        row_count = values.len(),
        "csv column read"
    );
    Ok(values)
}

/// Render a spreadsheet cell the way it reads on screen.
///
/// Excel stores whole numbers as floats; an ID typed as a number must come
/// back as `"12345678"`, not `"12345678.0"`, so integral floats are
/// formatted through i64.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => normalize_cell(value),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => {
            if value.fract() == 0.0 {
                (*value as i64).to_string()
            } else {
                value.to_string()
            }
        }
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => value.as_f64().to_string(),
        Data::DateTimeIso(value) | Data::DurationIso(value) => normalize_cell(value),
        Data::Error(_) => String::new(),
    }
}

/// Strip a BOM if present; cell whitespace is otherwise preserved so the
/// validator can distinguish a blank-looking cell from a truly empty one.
fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}
