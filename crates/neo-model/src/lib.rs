pub mod error;
pub mod processing;
pub mod rejection;
pub mod unid;

pub use error::{ModelError, Result};
pub use processing::{ProcessingResult, RawRow, RunSummary};
pub use rejection::{RejectionReason, RejectionRecord};
pub use unid::Unid;
