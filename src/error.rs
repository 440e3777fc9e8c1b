use thiserror::Error;

/// Errors raised at the edges of the engine.
///
/// Scoring itself never fails; these cover decoding remote input and
/// rebuilding an engine from a received snapshot.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid team id: {0} (expected 1 or 2)")]
    InvalidTeam(u8),

    #[error("Unknown match format: {0}")]
    UnknownFormat(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SSZ encoding failed: {0}")]
    Encoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;
