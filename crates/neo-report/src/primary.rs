//! The styled primary report: fixed instructional boilerplate plus one
//! uNID per row.
//!
//! The layout is a presentation contract consumed by a downstream intake
//! tool, so every cell position, merge, and style below is fixed
//! regardless of the data.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet, XlsxError};

use neo_model::Unid;

use crate::error::{ReportError, Result};

const TITLE: &str = "Instructions";
const EMAIL_INSTRUCTION: &str =
    "Do you want to send emails? Answer '1' for Yes, and '0' for No in Cell F2";
const ID_INSTRUCTION: &str = "Enter user ID/Username/Email in the below column";
const HEADER_WARNING: &str = "Do not remove instructions or change any headers";

/// All six visible columns get the same display width.
const COLUMN_WIDTH: f64 = 9.14;

/// 0-based row of the `ID` header; identifiers start on the row after.
const ID_HEADER_ROW: u32 = 5;

/// Write the primary report to `path`.
///
/// `unids` must already be deduplicated and sorted; this function renders
/// them in the order given.
pub fn write_primary_report(path: &Path, unids: &[Unid]) -> Result<()> {
    let mut workbook = Workbook::new();
    populate_primary_sheet(workbook.add_worksheet(), unids)
        .and_then(|()| workbook.save(path))
        .map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
}

fn populate_primary_sheet(
    worksheet: &mut Worksheet,
    unids: &[Unid],
) -> std::result::Result<(), XlsxError> {
    let centered_bold = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let centered_red = Format::new()
        .set_font_color(Color::Red)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let red_bold = Format::new().set_font_color(Color::Red).set_bold();

    worksheet.merge_range(0, 0, 0, 4, TITLE, &centered_bold)?;
    worksheet.merge_range(1, 0, 1, 4, EMAIL_INSTRUCTION, &centered_red)?;
    worksheet.write_number(1, 5, 0)?;
    worksheet.merge_range(2, 0, 2, 4, ID_INSTRUCTION, &centered_red)?;
    worksheet.merge_range(3, 0, 3, 4, HEADER_WARNING, &centered_red)?;
    worksheet.write_string_with_format(ID_HEADER_ROW, 0, "ID", &red_bold)?;
    for (offset, unid) in unids.iter().enumerate() {
        worksheet.write_string(ID_HEADER_ROW + 1 + offset as u32, 0, unid.as_str())?;
    }
    for col in 0..=5 {
        worksheet.set_column_width(col, COLUMN_WIDTH)?;
    }
    Ok(())
}
