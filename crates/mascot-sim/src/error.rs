use mascot_anim::AnimError;
use mascot_behavior::BehaviorError;
use mascot_core::MascotError;
use mascot_physics::PhysicsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("mascot configuration error: {0}")]
    Config(String),

    #[error("state table error: {0}")]
    Anim(#[from] AnimError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("physics error: {0}")]
    Physics(#[from] PhysicsError),

    #[error(transparent)]
    Core(#[from] MascotError),
}

pub type SimResult<T> = Result<T, SimError>;
