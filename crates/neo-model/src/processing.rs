use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::rejection::RejectionRecord;
use crate::unid::Unid;

/// One surviving input cell: its 1-based position within the surviving
/// sequence (after truncation and header/blank removal) and the raw value
/// as read from the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub ordinal: usize,
    pub value: String,
}

/// The outcome of validating one input column.
///
/// Invariant: every surviving input row contributed either a uNID to
/// `accepted` or a record to `rejected`; nothing is silently dropped.
/// `accepted` is deduplicated and sorted ascending; `rejected` keeps the
/// order rows were encountered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    pub accepted: Vec<Unid>,
    pub rejected: Vec<RejectionRecord>,
}

impl ProcessingResult {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Caller-facing summary of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub accepted_count: usize,
    pub rejected_count: usize,
    /// Path of the primary report. `None` only on dry runs.
    pub report_path: Option<PathBuf>,
    /// Path of the error report; written only when rejections exist.
    pub error_report_path: Option<PathBuf>,
    /// Every rejected row, in encounter order; mirrors the error report.
    pub rejections: Vec<RejectionRecord>,
}
