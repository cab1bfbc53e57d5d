use physics::PhysicsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("target position must have {expected} components, got {actual}")]
    InvalidTarget { expected: usize, actual: usize },
    #[error("action must have {expected} rotor speeds, got {actual}")]
    InvalidAction { expected: usize, actual: usize },
    #[error("action repeat must be at least 1, got {0}")]
    InvalidActionRepeat(usize),
    #[error("reward became non-finite ({reward}) on sub-step {sub_step}")]
    NonFiniteReward { reward: f32, sub_step: usize },
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error("invalid task config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to read task config: {0}")]
    Io(#[from] std::io::Error),
}
