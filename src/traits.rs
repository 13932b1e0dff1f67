use crate::planner::ChunkingConfig;
use crate::schema::Chunk;
use crate::Result;

/// Trait for text splitters (cutting text into bounded pieces).
pub trait TextSplitter {
    /// Split text into chunks.
    fn split_text(&self, text: &str) -> Result<Vec<String>>;
}

/// Trait for chunkers that turn a planned document into chunk records.
///
/// Implementations must treat the strategy, size bounds and overlap of the
/// config as hard targets. Chunks are returned in document order with
/// contiguous indices starting at 0.
pub trait Chunker: Send + Sync {
    /// Chunk `content` according to a resolved config.
    fn chunk(&self, content: &str, config: &ChunkingConfig) -> Result<Vec<Chunk>>;
}
