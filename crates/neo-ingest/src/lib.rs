pub mod column;
pub mod error;

pub use column::{read_csv_column, read_id_column, read_xlsx_column};
pub use error::{IngestError, Result};
