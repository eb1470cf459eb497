use thiserror::Error;

/// Errors that can occur when reading star parameters or writing the rendered catalogue.  The
/// enumeration itself can't fail.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StarError {
    #[error("a polygon needs at least 3 sides, not {0}")]
    TooFewSides(usize),

    #[error("a step pattern needs at least one step")]
    EmptySteps,

    #[error("step sizes must be positive")]
    ZeroStep,

    #[error("invalid step size: {0:?}")]
    InvalidStep(String),

    #[error("empty size range: {min}..={max}")]
    InvalidSizeRange { min: usize, max: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
