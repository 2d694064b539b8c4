use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("invalid scheduler config: {0}")]
    Config(String),

    #[error("behavior `{0}` is running and cannot be replaced")]
    ActiveBehavior(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
