use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnimError {
    #[error("state table parse error: {0}")]
    Parse(String),

    #[error("invalid state table: {0}")]
    InvalidTable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AnimResult<T> = Result<T, AnimError>;
