pub type SweepResult<T> = Result<T, SweepError>;

#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("pattern must be at least {min} characters long, got {got}")]
    PatternTooShort { min: usize, got: usize },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("zone not found: {0}")]
    ZoneNotFound(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("change batch rejected: {0}")]
    Conflict(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
