use std::io;
use thiserror::Error;

/// Error type for chunkwise
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before analysis (e.g. empty content)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error raised while splitting a document into chunks
    #[error("Chunking error: {0}")]
    Chunking(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
