use serde::{Deserialize, Serialize};
use std::fmt;

/// Algorithmic family used to split a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkingStrategy {
    /// Fixed-size character windows
    FixedSize,
    /// Split on structural boundaries (headers, paragraphs)
    Structural,
    /// Windows of consecutive sentences
    SentenceWindow,
    /// Semantic grouping of related passages
    Semantic,
    /// Large parent sections with smaller child chunks
    ParentDocument,
}

impl ChunkingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FixedSize => "fixed_size",
            Self::Structural => "structural",
            Self::SentenceWindow => "sentence_window",
            Self::Semantic => "semantic",
            Self::ParentDocument => "parent_document",
        }
    }
}

impl fmt::Display for ChunkingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller supplied knobs. `None` means "derive it", any `Some` value
/// (zero included) is kept as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_chunk_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chunk_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_window_size: Option<usize>,
}

impl ChunkingOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fixed_size(mut self, size: usize) -> Self {
        self.fixed_size = Some(size);
        self
    }

    pub fn with_min_chunk_size(mut self, size: usize) -> Self {
        self.min_chunk_size = Some(size);
        self
    }

    pub fn with_max_chunk_size(mut self, size: usize) -> Self {
        self.max_chunk_size = Some(size);
        self
    }

    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = Some(overlap);
        self
    }

    pub fn with_sentence_window_size(mut self, size: usize) -> Self {
        self.sentence_window_size = Some(size);
        self
    }
}

/// Fully resolved chunking configuration handed to a chunker.
///
/// `min_chunk_size` may exceed `max_chunk_size`. Documents kept as a single
/// chunk plan `min_chunk_size` as the whole length and leave
/// `max_chunk_size` at half of it; such plans are valid and a chunker sizes
/// them by `fixed_size` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    pub strategy: ChunkingStrategy,
    /// Window size for [`ChunkingStrategy::FixedSize`], in characters
    pub fixed_size: usize,
    pub min_chunk_size: usize,
    pub max_chunk_size: usize,
    /// Characters shared between consecutive chunks
    pub overlap: usize,
    /// Sentences per window for [`ChunkingStrategy::SentenceWindow`]
    pub sentence_window_size: usize,
    pub preserve_paragraphs: bool,
    pub extract_keywords: bool,
}
