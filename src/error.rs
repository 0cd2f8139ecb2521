use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    /// A spiral whose step size would divide by zero at `theta = 0`.
    #[error("spiral `{name}` has a degenerate shape factor {factor}")]
    DegenerateSpiral { name: &'static str, factor: f32 },
    #[error("camera scale must be positive and finite, got {scale}")]
    InvalidCamera { scale: f32 },
    #[error("scene needs at least one spiral")]
    NoSpirals,
}

pub type Result<T> = std::result::Result<T, SceneError>;
