use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("`{field}` must have {expected} components, got {actual}")]
    InvalidDimension {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid simulation parameter: {0}")]
    InvalidParameter(String),
}
