use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("write workbook {path}: {source}")]
    Write {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
