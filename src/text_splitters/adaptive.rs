use std::ops::Range;

use crate::planner::{ChunkingConfig, ChunkingStrategy};
use crate::schema::{Chunk, META_CHUNKING_STRATEGY};
use crate::traits::Chunker;
use crate::Result;

use super::character::{default_separators, CharacterTextSplitter};
use super::chunk::ChunkSize;
use super::keywords::{extract_keywords, DEFAULT_KEYWORD_LIMIT};

/// Chunker that follows the strategy of a resolved [`ChunkingConfig`]
#[derive(Debug, Clone)]
pub struct AdaptiveChunker {
    keyword_limit: usize,
}

impl Default for AdaptiveChunker {
    fn default() -> Self {
        Self {
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
        }
    }
}

/// Separators, by priority, for strategies that cut on text boundaries
fn separators_for(config: &ChunkingConfig) -> Vec<String> {
    match config.strategy {
        ChunkingStrategy::Structural | ChunkingStrategy::ParentDocument => vec![
            "\n#".to_string(),
            "\n\n".to_string(),
            "\n".to_string(),
            ". ".to_string(),
            " ".to_string(),
            "".to_string(),
        ],
        _ if config.preserve_paragraphs => default_separators(),
        _ => vec![" ".to_string(), "".to_string()],
    }
}

/// Byte ranges of consecutive groups of `window` sentences; the groups
/// cover `text` without gaps
fn sentence_windows(text: &str, window: usize) -> Vec<Range<usize>> {
    let mut windows = Vec::new();
    let mut start = 0;
    let mut end = 0;
    let mut count = 0;
    for sentence in text.split_inclusive(['.', '!', '?']) {
        end += sentence.len();
        count += 1;
        if count == window {
            windows.push(start..end);
            start = end;
            count = 0;
        }
    }
    if start < text.len() {
        windows.push(start..text.len());
    }
    windows
}

impl AdaptiveChunker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of keywords per chunk
    pub fn with_keyword_limit(mut self, keyword_limit: usize) -> Self {
        self.keyword_limit = keyword_limit;
        self
    }

    /// Byte spans of the chunks of `content`
    fn spans(&self, content: &str, config: &ChunkingConfig) -> Vec<Range<usize>> {
        let Some(size) = ChunkSize::for_config(config) else {
            // nothing to size against, keep the document whole
            return vec![0..content.len()];
        };

        let splitter = CharacterTextSplitter::new(size, separators_for(config))
            .with_min_chunk_size(config.min_chunk_size);

        // sentence windows are packed whole, like paragraphs
        let segments = match config.strategy {
            ChunkingStrategy::SentenceWindow if config.sentence_window_size > 0 => {
                sentence_windows(content, config.sentence_window_size)
            }
            _ => vec![0..content.len()],
        };
        splitter.split_spans(content, &segments)
    }
}

impl Chunker for AdaptiveChunker {
    fn chunk(&self, content: &str, config: &ChunkingConfig) -> Result<Vec<Chunk>> {
        if content.is_empty() {
            return Ok(Vec::new());
        }

        let chunks: Vec<Chunk> = self
            .spans(content, config)
            .into_iter()
            .filter(|span| !content[span.clone()].trim().is_empty())
            .enumerate()
            .map(|(index, span)| {
                let text = &content[span.clone()];
                let keywords = if config.extract_keywords {
                    extract_keywords(text, self.keyword_limit)
                } else {
                    Vec::new()
                };
                Chunk::new(index, text)
                    .with_span(span.start, span.end)
                    .with_keywords(keywords)
                    .with_metadata(META_CHUNKING_STRATEGY, config.strategy.as_str())
            })
            .collect();

        tracing::debug!(
            strategy = %config.strategy,
            chunks = chunks.len(),
            "chunked document"
        );
        Ok(chunks)
    }
}
