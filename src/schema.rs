use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Metadata key for the chosen chunking strategy
pub const META_CHUNKING_STRATEGY: &str = "chunking_strategy";
/// Metadata key for the document length in characters
pub const META_DOCUMENT_LENGTH: &str = "document_length";
/// Metadata key for the document size category
pub const META_DOCUMENT_CATEGORY: &str = "document_category";
/// Metadata key for the detected structure type
pub const META_STRUCTURE_TYPE: &str = "structure_type";
/// Metadata key for the number of chunks produced so far
pub const META_CHUNK_COUNT: &str = "chunk_count";

/// A source document together with its planning metadata and chunks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier, generated on creation
    pub id: String,

    /// The document's raw text
    pub content: String,

    /// Where the document came from (path, URL, ...)
    pub source: String,

    /// Caller supplied document type
    pub doc_type: String,

    /// Metadata associated with the document
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,

    /// Chunks produced by a chunker, empty until one has run
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chunks: Vec<Chunk>,
}

impl Document {
    /// Create a new document with a fresh identifier
    pub fn new(
        content: impl Into<String>,
        source: impl Into<String>,
        doc_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            source: source.into(),
            doc_type: doc_type.into(),
            metadata: HashMap::new(),
            chunks: Vec::new(),
        }
    }

    /// Add metadata to the document
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Replace the chunks and keep the `chunk_count` metadata in sync
    pub fn set_chunks(&mut self, mut chunks: Vec<Chunk>) {
        for chunk in &mut chunks {
            chunk.document_id = self.id.clone();
        }
        self.metadata
            .insert(META_CHUNK_COUNT.to_string(), chunks.len().into());
        self.chunks = chunks;
    }

    /// Number of chunks recorded in the metadata
    pub fn chunk_count(&self) -> usize {
        self.metadata
            .get(META_CHUNK_COUNT)
            .and_then(|v| v.as_u64())
            .map(|n| n as usize)
            .unwrap_or(0)
    }
}

/// A bounded contiguous span of a document's text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Unique identifier of the chunk
    pub id: String,

    /// Identifier of the owning document, empty until attached
    #[serde(default)]
    pub document_id: String,

    /// Position of the chunk within the document
    pub index: usize,

    /// The chunk text
    pub content: String,

    /// Length of `content` in characters
    pub char_count: usize,

    /// Byte offset of the chunk's first character in the document content
    #[serde(default)]
    pub start: usize,

    /// Byte offset just past the chunk's last character
    #[serde(default)]
    pub end: usize,

    /// Keywords extracted from the chunk
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Additional metadata
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Chunk {
    /// Create a new chunk at the given position
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            id: Uuid::new_v4().to_string(),
            document_id: String::new(),
            index,
            char_count: content.chars().count(),
            start: 0,
            end: content.len(),
            content,
            keywords: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Place the chunk at a byte span of the document content
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the keywords of the chunk
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Add metadata to the chunk
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
