//! The plain tabular error report: one row per rejected input.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use neo_model::RejectionRecord;

use crate::error::{ReportError, Result};

const HEADERS: [&str; 3] = ["Row", "Raw_ID", "Error"];

/// Write the error report to `path`.
///
/// Rejections are rendered in the order given, which is the order they
/// were encountered in the input. The caller skips this report entirely
/// when there are no rejections.
pub fn write_rejection_report(path: &Path, rejections: &[RejectionRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    populate_rejection_sheet(workbook.add_worksheet(), rejections)
        .and_then(|()| workbook.save(path))
        .map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
}

fn populate_rejection_sheet(
    worksheet: &mut Worksheet,
    rejections: &[RejectionRecord],
) -> std::result::Result<(), XlsxError> {
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (offset, record) in rejections.iter().enumerate() {
        let row = offset as u32 + 1;
        worksheet.write_number(row, 0, record.row as f64)?;
        worksheet.write_string(row, 1, &record.raw)?;
        worksheet.write_string(row, 2, record.reason.to_string())?;
    }
    Ok(())
}
