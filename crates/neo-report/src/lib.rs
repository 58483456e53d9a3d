//! NEO uNID report generation.
//!
//! Two workbooks come out of a run:
//!
//! - the **primary report**: fixed instruction rows plus the sorted uNIDs,
//!   styled for the downstream intake tool;
//! - the **error report**: a plain `Row` / `Raw_ID` / `Error` table, only
//!   written when at least one input row was rejected.

mod error;
mod primary;
mod rejections;

pub use error::{ReportError, Result};
pub use primary::write_primary_report;
pub use rejections::write_rejection_report;
