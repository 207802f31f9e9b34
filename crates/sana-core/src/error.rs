use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid frequency value: {0} (expected 0..=3)")]
    InvalidFrequency(u8),
}
