use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the identifier column from an input file.
///
/// All of these are input errors in the pipeline taxonomy: the run aborts
/// and no output files are written.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported input format: {path} (expected .xlsx or .csv)")]
    UnsupportedFormat { path: PathBuf },

    #[error("open workbook {path}: {source}")]
    OpenWorkbook {
        path: PathBuf,
        source: calamine::XlsxError,
    },

    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    #[error("read sheet {sheet:?} in {path}: {source}")]
    ReadSheet {
        path: PathBuf,
        sheet: String,
        source: calamine::XlsxError,
    },

    #[error("read csv {path}: {source}")]
    ReadCsv { path: PathBuf, source: csv::Error },

    #[error("no identifier column found in {path}")]
    EmptyColumn { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
