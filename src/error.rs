use thiserror::Error;

/// Fatal errors raised while validating a program before generation or testing.
///
/// These abort the whole operation; they are never downgraded to a skipped
/// block. Malformed block *data* (missing properties, non-integer constants) is
/// deliberately not an error — the offending block is skipped instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No diagrams provided")]
    EmptyProgram,

    #[error("Too many thread diagrams. Maximum allowed: {max}")]
    TooManyThreads { max: usize },

    #[error("Too many blocks in thread diagram '{diagram}'. Maximum allowed: {max}")]
    TooManyBlocks { diagram: String, max: usize },

    #[error("Cyclic dependency detected in diagram '{diagram}' that may cause deadlock")]
    CyclicDiagram { diagram: String },

    #[error("Too many shared variables ({count}). Maximum allowed: {max}")]
    TooManySharedVariables { count: usize, max: usize },
}

/// Errors that can occur when converting a custom diagram format into a
/// kousa `Program`.
#[derive(Error, Debug, Clone)]
pub enum ProgramConversionError {
    #[error("Invalid diagram data: {0}")]
    ValidationError(String),
}
