use thiserror::Error;

/// Configuration errors raised when building motion components.
///
/// Per-frame math never fails; only constructors validate their inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("particle field needs at least one point")]
    EmptyField,
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("damping must be in (0, 1], got {0}")]
    Damping(f32),
    #[error("invalid range for {name}: [{min}, {max}]")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("choreographer needs at least one stage")]
    NoStages,
    #[error("breakpoints must be sorted and inside (0, 1): {0:?}")]
    Breakpoints(Vec<f32>),
    #[error("{breakpoints} breakpoints cannot split {stages} stages")]
    BreakpointCount { breakpoints: usize, stages: usize },
    #[error("keyframes need matching, non-empty input and output stops ({inputs} vs {outputs})")]
    Keyframes { inputs: usize, outputs: usize },
}

pub type MotionResult<T> = Result<T, MotionError>;
