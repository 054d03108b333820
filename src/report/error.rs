use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("line {line}: expected id, full name and score but found {found} field(s)")]
    MissingField { line: usize, found: usize },
    #[error("line {line}: score '{value}' is not a whole number")]
    InvalidScoreFormat { line: usize, value: String },
    #[error("line {line}: id '{value}' is not a whole number")]
    InvalidIdFormat { line: usize, value: String },
    #[error("failed to access {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;
