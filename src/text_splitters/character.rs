use std::ops::Range;

use crate::traits::TextSplitter;
use crate::Result;

use super::chunk::ChunkSize;

/// Text splitter that splits text based on character delimiters.
///
/// Text is cut recursively, trying each separator in priority order until
/// every piece fits the piece limit, then adjacent pieces are merged greedily
/// with overlap. Separators stay at the start of the piece that follows them,
/// so the pieces of a text always concatenate back to the text.
///
/// With a minimum chunk size below the chunk size, pieces are cut down to
/// `chunk_size - min_chunk_size` characters. A chunk is only closed when the
/// next piece would overflow it, so every chunk but the last reaches the
/// minimum.
pub struct CharacterTextSplitter {
    /// Size configuration for chunks
    chunk_size: ChunkSize,
    /// List of delimiter strings, ordered by priority
    separators: Vec<String>,
    /// Lower bound for every chunk except the last
    min_chunk_size: usize,
}

impl Default for CharacterTextSplitter {
    fn default() -> Self {
        Self {
            chunk_size: ChunkSize::default(),
            separators: default_separators(),
            min_chunk_size: 0,
        }
    }
}

/// Paragraph, line, word, character
pub fn default_separators() -> Vec<String> {
    vec![
        "\n\n".to_string(),
        "\n".to_string(),
        " ".to_string(),
        "".to_string(),
    ]
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte ranges of `text` cut before every occurrence of `separator`
fn split_keep_leading(text: &str, separator: &str) -> Vec<Range<usize>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, _) in text.match_indices(separator) {
        if idx > start {
            pieces.push(start..idx);
            start = idx;
        }
    }
    pieces.push(start..text.len());
    pieces
}

impl CharacterTextSplitter {
    /// Create a new text splitter with custom parameters
    pub fn new(chunk_size: ChunkSize, separators: Vec<String>) -> Self {
        Self {
            chunk_size,
            separators,
            min_chunk_size: 0,
        }
    }

    /// Create a new text splitter with default separators
    pub fn with_chunk_size(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        Ok(Self {
            chunk_size: ChunkSize::new(chunk_size, chunk_overlap)?,
            ..Default::default()
        })
    }

    /// Set the minimum size of every chunk but the last
    pub fn with_min_chunk_size(mut self, min_chunk_size: usize) -> Self {
        self.min_chunk_size = min_chunk_size;
        self
    }

    /// Longest piece the recursive split leaves uncut
    fn piece_limit(&self) -> usize {
        let size = self.chunk_size.chunk_size;
        if self.min_chunk_size > 0 && self.min_chunk_size < size {
            size - self.min_chunk_size
        } else {
            size
        }
    }

    /// Chunk byte spans of `text`.
    ///
    /// `segments` are consecutive byte ranges covering `text`; a segment is
    /// kept as a single piece unless it exceeds the piece limit.
    pub fn split_spans(&self, text: &str, segments: &[Range<usize>]) -> Vec<Range<usize>> {
        let mut pieces = Vec::new();
        for segment in segments {
            self.split_recursive(text, segment.clone(), &self.separators, &mut pieces);
        }

        let lengths: Vec<usize> = pieces.iter().map(|p| char_len(&text[p.clone()])).collect();
        self.merge_splits(&lengths)
            .into_iter()
            .map(|range| pieces[range.start].start..pieces[range.end - 1].end)
            .collect()
    }

    /// Cut `span` of `text` into pieces no longer than the piece limit
    /// where possible
    fn split_recursive(
        &self,
        text: &str,
        span: Range<usize>,
        separators: &[String],
        out: &mut Vec<Range<usize>>,
    ) {
        let piece = &text[span.clone()];
        if char_len(piece) <= self.piece_limit() {
            if !piece.is_empty() {
                out.push(span);
            }
            return;
        }

        let Some(pos) = separators
            .iter()
            .position(|s| s.is_empty() || piece.contains(s.as_str()))
        else {
            // nothing left to cut on, keep the oversized piece
            out.push(span);
            return;
        };

        let separator = &separators[pos];
        if separator.is_empty() {
            out.extend(
                piece
                    .char_indices()
                    .map(|(i, c)| span.start + i..span.start + i + c.len_utf8()),
            );
            return;
        }

        let rest = &separators[pos + 1..];
        for sub in split_keep_leading(piece, separator) {
            self.split_recursive(text, span.start + sub.start..span.start + sub.end, rest, out);
        }
    }

    /// Merge pieces (given by their lengths) into ranges that respect the
    /// chunk size, carrying trailing pieces forward as overlap
    fn merge_splits(&self, lengths: &[usize]) -> Vec<Range<usize>> {
        let size = self.chunk_size.chunk_size;
        let overlap = self.chunk_size.chunk_overlap;

        let mut ranges = Vec::new();
        let mut start = 0;
        let mut current_length = 0;

        for (i, &split_length) in lengths.iter().enumerate() {
            if current_length + split_length > size && i > start {
                ranges.push(start..i);

                // Find the last few pieces that fit within the overlap,
                // never carrying the whole previous chunk
                let mut overlap_start = i;
                let mut overlap_length = 0;
                while overlap_start > start + 1
                    && overlap_length + lengths[overlap_start - 1] <= overlap
                {
                    overlap_start -= 1;
                    overlap_length += lengths[overlap_start];
                }

                start = overlap_start;
                current_length = overlap_length;
                while start < i && current_length + split_length > size {
                    current_length -= lengths[start];
                    start += 1;
                }
            }

            current_length += split_length;
        }

        if start < lengths.len() {
            ranges.push(start..lengths.len());
        }

        // An undersized tail borrows whole pieces from the end of its
        // predecessor while both chunks stay in bounds
        if ranges.len() >= 2 {
            let n = ranges.len();
            let prev = ranges[n - 2].clone();
            let last = ranges[n - 1].clone();
            let mut shared = prev.end - last.start;

            let mut tail_start = last.start;
            let mut tail_length: usize = lengths[last.clone()].iter().sum();
            while tail_length < self.min_chunk_size
                && tail_start > prev.start + 1
                && tail_length + lengths[tail_start - 1] <= size
            {
                tail_start -= 1;
                tail_length += lengths[tail_start];
            }

            if tail_start < last.start {
                // keep the shared span within the configured overlap
                while shared > 0
                    && lengths[tail_start..tail_start + shared].iter().sum::<usize>() > overlap
                {
                    shared -= 1;
                }
                let prev_length: usize = lengths[prev.start..tail_start + shared].iter().sum();
                if prev_length >= self.min_chunk_size {
                    ranges[n - 2] = prev.start..tail_start + shared;
                    ranges[n - 1] = tail_start..last.end;
                }
            }
        }

        ranges
    }
}

impl TextSplitter for CharacterTextSplitter {
    fn split_text(&self, text: &str) -> Result<Vec<String>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .split_spans(text, &[0..text.len()])
            .into_iter()
            .map(|span| text[span].to_string())
            .collect())
    }
}
