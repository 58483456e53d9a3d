//! End-to-end pipeline orchestration with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the first column of the input spreadsheet
//! 2. **Process**: truncate at the section break, validate, deduplicate
//! 3. **Name**: derive output file names from the week anchor date
//! 4. **Output**: write the primary report and, if needed, the error report
//!
//! The whole run is a single synchronous call; any concurrency needed to
//! keep a caller responsive belongs to the caller.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{info, info_span};

use neo_ingest::{IngestError, read_id_column};
use neo_model::RunSummary;
use neo_report::{ReportError, write_primary_report, write_rejection_report};

use crate::batch::process_rows;
use crate::naming::{report_file_names, week_anchor};

/// Errors that abort a pipeline run.
///
/// Row-level validation failures are not errors; they are carried in the
/// run's rejection list and the error report.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input file could not be read at all. Nothing was written.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The primary report could not be written. Nothing was written.
    #[error("primary report: {source}")]
    WriteReport { source: ReportError },

    /// The error report failed after the primary report was already
    /// written; the primary at `primary` is left in place. Callers must
    /// treat this as a partial write, not full success.
    #[error("error report failed after primary was written to {primary}: {source}")]
    WriteErrorReport { primary: PathBuf, source: ReportError },
}

/// Knobs for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Pin the week anchor to a specific date instead of today.
    pub as_of: Option<NaiveDate>,
    /// Write reports here instead of the input file's directory.
    pub output_dir: Option<PathBuf>,
    /// Validate and count without writing any files.
    pub dry_run: bool,
}

/// Process one input spreadsheet and write the weekly reports.
pub fn process_file(input: &Path, options: &ProcessOptions) -> Result<RunSummary, PipelineError> {
    let span = info_span!("process_file", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let column = info_span!("ingest").in_scope(|| read_id_column(input))?;
    let result = info_span!("process").in_scope(|| process_rows(&column));

    let anchor = week_anchor(options.as_of.unwrap_or_else(|| Local::now().date_naive()));
    let (report_name, error_report_name) = report_file_names(anchor);
    let output_dir = options
        .output_dir
        .clone()
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    let report_path = output_dir.join(&report_name);
    let error_report_path = output_dir.join(&error_report_name);

    if options.dry_run {
        info!(
            input = %input.display(),
            accepted = result.accepted_count(),
            rejected = result.rejected_count(),
            duration_ms = start.elapsed().as_millis(),
            "dry run complete, no files written"
        );
        return Ok(RunSummary {
            input: input.to_path_buf(),
            output_dir,
            accepted_count: result.accepted_count(),
            rejected_count: result.rejected_count(),
            report_path: None,
            error_report_path: None,
            rejections: result.rejected,
        });
    }

    let output_span = info_span!("output", output_dir = %output_dir.display());
    let output_guard = output_span.enter();
    write_primary_report(&report_path, &result.accepted)
        .map_err(|source| PipelineError::WriteReport { source })?;
    let written_error_report = if result.has_rejections() {
        write_rejection_report(&error_report_path, &result.rejected).map_err(|source| {
            PipelineError::WriteErrorReport {
                primary: report_path.clone(),
                source,
            }
        })?;
        Some(error_report_path)
    } else {
        None
    };
    drop(output_guard);

    info!(
        input = %input.display(),
        accepted = result.accepted_count(),
        rejected = result.rejected_count(),
        report = %report_path.display(),
        duration_ms = start.elapsed().as_millis(),
        "processing complete"
    );

    Ok(RunSummary {
        input: input.to_path_buf(),
        output_dir,
        accepted_count: result.accepted_count(),
        rejected_count: result.rejected_count(),
        report_path: Some(report_path),
        error_report_path: written_error_report,
        rejections: result.rejected,
    })
}
