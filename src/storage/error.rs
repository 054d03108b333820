#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i32),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
