use thiserror::Error;

/// Errors surfaced by the replay core and the results loader
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("histories differ in length ({left} vs {right} rounds)")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid action {found:?} at round {index}, expected '0' or '1'")]
    InvalidAction { index: usize, found: char },

    #[error("malformed results record: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read results record: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReplayError>;
