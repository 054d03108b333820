pub mod error;
pub mod reader;
pub mod writer;

pub use error::{ReportError, ReportResult};
pub use reader::{parse_line, read_students};
pub use writer::{format_line, write_report};
