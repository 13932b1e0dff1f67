use crate::analysis::analyze_document;
use crate::error::Error;
use crate::planner::{adaptive_chunking_strategy, ChunkingConfig, ChunkingOverrides};
use crate::schema::{
    Document, META_CHUNKING_STRATEGY, META_CHUNK_COUNT, META_DOCUMENT_CATEGORY,
    META_DOCUMENT_LENGTH, META_STRUCTURE_TYPE,
};
use crate::traits::Chunker;
use crate::Result;

/// Analyzes documents and plans how they should be chunked
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentProcessor;

impl DocumentProcessor {
    /// Create a new document processor
    pub fn new() -> Self {
        Self
    }

    /// Analyze `content`, plan its chunking and assemble a [`Document`].
    ///
    /// The returned document carries the planning metadata and a
    /// `chunk_count` of 0; no chunks are produced. Empty content is rejected
    /// before any analysis runs.
    pub fn process_document_content(
        &self,
        content: &str,
        source: &str,
        doc_type: &str,
        overrides: Option<&ChunkingOverrides>,
    ) -> Result<(Document, ChunkingConfig)> {
        if content.is_empty() {
            return Err(Error::Validation("Content cannot be empty".to_string()));
        }

        let characteristics = analyze_document(content);
        let config = adaptive_chunking_strategy(&characteristics, overrides);

        tracing::info!(
            length = characteristics.length,
            category = %characteristics.category,
            structure = %characteristics.structure_type,
            strategy = %config.strategy,
            "document analysis"
        );

        let doc = Document::new(content, source, doc_type)
            .with_metadata(META_CHUNKING_STRATEGY, config.strategy.as_str())
            .with_metadata(META_DOCUMENT_LENGTH, characteristics.length)
            .with_metadata(META_DOCUMENT_CATEGORY, characteristics.category.as_str())
            .with_metadata(META_STRUCTURE_TYPE, characteristics.structure_type.as_str())
            .with_metadata(META_CHUNK_COUNT, 0);

        Ok((doc, config))
    }

    /// Plan a document as [`Self::process_document_content`] does, then run
    /// `chunker` over it and attach the resulting chunks.
    pub fn process_document(
        &self,
        content: &str,
        source: &str,
        doc_type: &str,
        overrides: Option<&ChunkingOverrides>,
        chunker: &dyn Chunker,
    ) -> Result<(Document, ChunkingConfig)> {
        let (mut doc, config) =
            self.process_document_content(content, source, doc_type, overrides)?;

        let chunks = chunker.chunk(&doc.content, &config)?;
        doc.set_chunks(chunks);

        Ok((doc, config))
    }
}

/// Plan the chunking of a single document.
///
/// Shorthand for [`DocumentProcessor::process_document_content`].
pub fn plan_document(
    content: &str,
    source: &str,
    doc_type: &str,
    overrides: Option<&ChunkingOverrides>,
) -> Result<(Document, ChunkingConfig)> {
    DocumentProcessor::new().process_document_content(content, source, doc_type, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::ChunkingStrategy;
    use crate::schema::Chunk;
    use crate::text_splitters::AdaptiveChunker;

    struct FailingChunker;

    impl Chunker for FailingChunker {
        fn chunk(&self, _content: &str, _config: &ChunkingConfig) -> Result<Vec<Chunk>> {
            Err(Error::Chunking("splitter unavailable".to_string()))
        }
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let result = plan_document("", "mem", "text", None);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_metadata_is_recorded() {
        let content = "a".repeat(500);
        let (doc, config) = plan_document(&content, "notes.txt", "text", None).unwrap();
        assert_eq!(config.strategy, ChunkingStrategy::FixedSize);
        assert_eq!(doc.source, "notes.txt");
        assert_eq!(doc.doc_type, "text");
        assert_eq!(doc.metadata[META_CHUNKING_STRATEGY], "fixed_size");
        assert_eq!(doc.metadata[META_DOCUMENT_LENGTH], 500);
        assert_eq!(doc.metadata[META_DOCUMENT_CATEGORY], "very_small");
        assert_eq!(doc.metadata[META_STRUCTURE_TYPE], "none");
        assert_eq!(doc.chunk_count(), 0);
        assert!(doc.chunks.is_empty());
    }

    #[test]
    fn test_process_document_attaches_chunks() {
        let content = "word ".repeat(400);
        let (doc, config) = DocumentProcessor::new()
            .process_document(&content, "mem", "text", None, &AdaptiveChunker::new())
            .unwrap();
        assert_eq!(config.strategy, ChunkingStrategy::SentenceWindow);
        assert!(doc.chunk_count() > 1);
        assert_eq!(doc.chunk_count(), doc.chunks.len());
        assert!(doc.chunks.iter().all(|c| c.document_id == doc.id));
    }

    #[test]
    fn test_chunker_failure_aborts() {
        let result = DocumentProcessor::new().process_document(
            "some content",
            "mem",
            "text",
            None,
            &FailingChunker,
        );
        assert!(matches!(result, Err(Error::Chunking(_))));
    }
}
