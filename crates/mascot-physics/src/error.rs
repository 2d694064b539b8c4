use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhysicsError {
    #[error("invalid physics config: {0}")]
    InvalidConfig(String),
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;
