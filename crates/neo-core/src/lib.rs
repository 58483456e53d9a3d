//! NEO uNID processing core.
//!
//! Turns a spreadsheet of raw 8-digit IDs into the weekly uNID reports:
//! truncate at the section break, validate and canonicalize each row,
//! deduplicate and sort, and write the styled primary report plus an
//! optional error report.

pub mod batch;
pub mod naming;
pub mod pipeline;
pub mod section;
pub mod validate;

pub use batch::process_rows;
pub use naming::{report_file_names, week_anchor};
pub use pipeline::{PipelineError, ProcessOptions, process_file};
pub use section::{HEADER_TOKEN, SECTION_SENTINELS, is_section_break, surviving_rows};
pub use validate::{RAW_ID_DIGITS, validate_unid};
