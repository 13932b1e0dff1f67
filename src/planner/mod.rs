//! Chunking strategy planning from document characteristics.

mod adaptive;
mod config;

pub use adaptive::{
    adaptive_chunking_strategy, calculate_optimal_chunk_count, MAX_CHUNK_SIZE,
    MIN_MEANINGFUL_CHUNK_SIZE, OVERLAP_RATIO, PREFERRED_CHUNK_SIZE, SMALL_DOC_OVERLAP_RATIO,
};
pub use config::{ChunkingConfig, ChunkingOverrides, ChunkingStrategy};
