use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlossomError {
    #[error("invalid set size parameter: {0}")]
    InvalidSetSize(u64),

    #[error("invalid false positive probability parameter: {0}")]
    InvalidFalsePosProb(f64),

    #[error("hash write failed: {0}")]
    HashWrite(String),
}

pub type Result<T> = std::result::Result<T, BlossomError>;
