use crate::error::Error;
use crate::planner::{ChunkingConfig, ChunkingStrategy};
use crate::Result;

/// Struct to define chunk size constraints, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSize {
    /// The target size for each chunk
    pub chunk_size: usize,
    /// The amount of overlap between chunks
    pub chunk_overlap: usize,
}

impl ChunkSize {
    /// Create a new chunk size configuration
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_overlap >= chunk_size {
            return Err(Error::Chunking(format!(
                "Chunk overlap ({}) must be less than chunk size ({})",
                chunk_overlap, chunk_size
            )));
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    /// Size constraints implied by a resolved config. Fixed-size plans use
    /// `fixed_size` as the target, every other strategy `max_chunk_size`.
    /// Returns `None` when the target is zero.
    pub fn for_config(config: &ChunkingConfig) -> Option<Self> {
        let chunk_size = match config.strategy {
            ChunkingStrategy::FixedSize => config.fixed_size,
            _ => config.max_chunk_size,
        };
        if chunk_size == 0 {
            return None;
        }
        Some(Self {
            chunk_size,
            chunk_overlap: config.overlap.min(chunk_size - 1),
        })
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}
