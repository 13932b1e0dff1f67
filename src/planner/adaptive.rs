use crate::analysis::{DocumentCategory, DocumentCharacteristics, DocumentStructureType};

use super::config::{ChunkingConfig, ChunkingOverrides, ChunkingStrategy};

/// Minimum characters for a meaningful chunk
pub const MIN_MEANINGFUL_CHUNK_SIZE: usize = 200;
/// Maximum chunk size for documents of 3000 characters and more
pub const MAX_CHUNK_SIZE: usize = 1500;
/// Preferred fixed window size for documents of 2000 characters and more
pub const PREFERRED_CHUNK_SIZE: usize = 800;
/// Overlap as a fraction of the fixed window size
pub const OVERLAP_RATIO: f64 = 0.15;
/// Overlap ratio for documents under 1500 characters
pub const SMALL_DOC_OVERLAP_RATIO: f64 = 0.10;

/// Documents shorter than this stay a single chunk
const SINGLE_CHUNK_LIMIT: usize = 600;
const VERY_SMALL_MIN_FLOOR: usize = 250;
const SMALL_TARGET_FLOOR: usize = 400;
const SMALL_MAX_HEADROOM: usize = 300;
const SMALL_SENTENCE_WINDOW: usize = 4;
const LARGE_MIN_CHUNK_SIZE: usize = 400;
const LARGE_MAX_CHUNK_SIZE: usize = 1200;

/// Ideal number of chunks for a document of `length` characters.
/// Always at least 1.
pub fn calculate_optimal_chunk_count(length: usize) -> usize {
    match length {
        l if l < 600 => 1,
        l if l < 1200 => 2,
        l if l < 2000 => 3,
        l if l < 4000 => 4,
        l if l < 8000 => l.div_ceil(1500),
        l => l.div_ceil(1000),
    }
}

/// Numeric knobs while planning; `None` is still open for defaulting.
#[derive(Debug, Default)]
struct Draft {
    fixed_size: Option<usize>,
    min_chunk_size: Option<usize>,
    max_chunk_size: Option<usize>,
    overlap: Option<usize>,
    sentence_window_size: Option<usize>,
}

impl Draft {
    /// Caller values win over the ones proposed by category dispatch
    fn overridden_by(self, overrides: &ChunkingOverrides) -> Self {
        Self {
            fixed_size: overrides.fixed_size.or(self.fixed_size),
            min_chunk_size: overrides.min_chunk_size.or(self.min_chunk_size),
            max_chunk_size: overrides.max_chunk_size.or(self.max_chunk_size),
            overlap: overrides.overlap.or(self.overlap),
            sentence_window_size: overrides.sentence_window_size.or(self.sentence_window_size),
        }
    }
}

/// Pick the strategy and propose size bounds from the size category.
fn dispatch(c: &DocumentCharacteristics, optimal_chunk_count: usize) -> (ChunkingStrategy, Draft) {
    let length = c.length;

    match c.category {
        DocumentCategory::VerySmall if length < SINGLE_CHUNK_LIMIT => {
            tracing::debug!(length, "very small document: keeping as single chunk");
            let draft = Draft {
                fixed_size: Some(length),
                overlap: Some(0),
                min_chunk_size: Some(length),
                ..Default::default()
            };
            (ChunkingStrategy::FixedSize, draft)
        }
        DocumentCategory::VerySmall => {
            // bounds keep the result at two or three chunks
            let draft = Draft {
                min_chunk_size: Some((length / 3).max(VERY_SMALL_MIN_FLOOR)),
                max_chunk_size: Some(length / 2),
                ..Default::default()
            };
            tracing::debug!(
                min = draft.min_chunk_size,
                max = draft.max_chunk_size,
                "very small document: conservative chunking"
            );
            (ChunkingStrategy::Structural, draft)
        }
        DocumentCategory::Small => {
            let target = (length / optimal_chunk_count).max(SMALL_TARGET_FLOOR);
            tracing::debug!(
                optimal_chunk_count,
                target,
                has_structure = c.has_structure,
                "small document: targeting chunk size"
            );
            if c.has_structure {
                let draft = Draft {
                    min_chunk_size: Some(target),
                    max_chunk_size: Some(target + SMALL_MAX_HEADROOM),
                    ..Default::default()
                };
                (ChunkingStrategy::Structural, draft)
            } else {
                let draft = Draft {
                    sentence_window_size: Some(SMALL_SENTENCE_WINDOW),
                    min_chunk_size: Some(target),
                    ..Default::default()
                };
                (ChunkingStrategy::SentenceWindow, draft)
            }
        }
        DocumentCategory::Medium => {
            let strategy = match (c.structure_type, c.has_structure) {
                (DocumentStructureType::Hierarchical, _) => ChunkingStrategy::ParentDocument,
                (_, true) => ChunkingStrategy::Structural,
                (_, false) => ChunkingStrategy::Semantic,
            };
            (strategy, Draft::default())
        }
        DocumentCategory::Large | DocumentCategory::VeryLarge => {
            let draft = Draft {
                max_chunk_size: Some(LARGE_MAX_CHUNK_SIZE),
                min_chunk_size: Some(LARGE_MIN_CHUNK_SIZE),
                ..Default::default()
            };
            (ChunkingStrategy::ParentDocument, draft)
        }
    }
}

/// Derive a complete chunking configuration for a document.
///
/// The strategy always comes from the size category. Numeric knobs take the
/// caller's value when one is given, then the category's proposal, then a
/// size based default. The caller's overrides are never modified.
pub fn adaptive_chunking_strategy(
    characteristics: &DocumentCharacteristics,
    overrides: Option<&ChunkingOverrides>,
) -> ChunkingConfig {
    let length = characteristics.length;
    let optimal_chunk_count = calculate_optimal_chunk_count(length);
    tracing::debug!(length, optimal_chunk_count, "planning chunking strategy");

    let (strategy, proposed) = dispatch(characteristics, optimal_chunk_count);
    let draft = match overrides {
        Some(overrides) => proposed.overridden_by(overrides),
        None => proposed,
    };

    let min_chunk_size = draft.min_chunk_size.unwrap_or(if length < 2000 {
        (length / 4).max(MIN_MEANINGFUL_CHUNK_SIZE)
    } else {
        MIN_MEANINGFUL_CHUNK_SIZE
    });

    let max_chunk_size = draft.max_chunk_size.unwrap_or(if length < 3000 {
        length / 2
    } else {
        MAX_CHUNK_SIZE
    });

    let fixed_size = draft.fixed_size.unwrap_or(if length < 2000 {
        length / optimal_chunk_count
    } else {
        PREFERRED_CHUNK_SIZE
    });

    let mut overlap = draft.overlap.unwrap_or_else(|| {
        let ratio = if length < 1500 {
            SMALL_DOC_OVERLAP_RATIO
        } else {
            OVERLAP_RATIO
        };
        (fixed_size as f64 * ratio) as usize
    });

    if fixed_size > 0 && overlap >= fixed_size {
        tracing::warn!(
            overlap,
            fixed_size,
            "overlap must be smaller than the fixed size, clamping"
        );
        overlap = fixed_size - 1;
    }

    ChunkingConfig {
        strategy,
        fixed_size,
        min_chunk_size,
        max_chunk_size,
        overlap,
        sentence_window_size: draft.sentence_window_size.unwrap_or(0),
        preserve_paragraphs: true,
        extract_keywords: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn characteristics(
        length: usize,
        structure_type: DocumentStructureType,
    ) -> DocumentCharacteristics {
        DocumentCharacteristics {
            length,
            category: DocumentCategory::from_length(length),
            has_structure: structure_type != DocumentStructureType::None,
            structure_type,
            language: "en".to_string(),
            complexity: 0.5,
        }
    }

    fn plan(length: usize, structure_type: DocumentStructureType) -> ChunkingConfig {
        adaptive_chunking_strategy(&characteristics(length, structure_type), None)
    }

    fn structure_type_strategy() -> impl Strategy<Value = DocumentStructureType> {
        prop_oneof![
            Just(DocumentStructureType::None),
            Just(DocumentStructureType::Simple),
            Just(DocumentStructureType::Sectioned),
            Just(DocumentStructureType::Hierarchical),
        ]
    }

    #[test]
    fn test_optimal_chunk_count() {
        let cases = [
            (0, 1),
            (599, 1),
            (600, 2),
            (1199, 2),
            (1200, 3),
            (1999, 3),
            (2000, 4),
            (3999, 4),
            (4000, 3),
            (7999, 6),
            (8000, 8),
            (8001, 9),
            (50000, 50),
        ];
        for (length, expected) in cases {
            assert_eq!(calculate_optimal_chunk_count(length), expected, "length {}", length);
        }
    }

    #[test]
    fn test_tiny_document_is_single_chunk() {
        let config = plan(500, DocumentStructureType::None);
        assert_eq!(config.strategy, ChunkingStrategy::FixedSize);
        assert_eq!(config.fixed_size, 500);
        assert_eq!(config.overlap, 0);
        assert_eq!(config.min_chunk_size, 500);
        assert_eq!(config.max_chunk_size, 250);
        assert!(config.preserve_paragraphs);
        assert!(config.extract_keywords);
    }

    #[test]
    fn test_very_small_document_conservative_bounds() {
        let config = plan(800, DocumentStructureType::None);
        assert_eq!(config.strategy, ChunkingStrategy::Structural);
        assert_eq!(config.min_chunk_size, 266);
        assert_eq!(config.max_chunk_size, 400);
        assert_eq!(config.fixed_size, 400);
        assert_eq!(config.overlap, 40);

        let config = plan(700, DocumentStructureType::None);
        assert_eq!(config.min_chunk_size, 250);
        assert_eq!(config.max_chunk_size, 350);
    }

    #[test]
    fn test_small_unstructured_uses_sentence_windows() {
        let config = plan(2500, DocumentStructureType::None);
        assert_eq!(config.strategy, ChunkingStrategy::SentenceWindow);
        assert_eq!(config.sentence_window_size, 4);
        assert_eq!(config.min_chunk_size, 625);
        assert_eq!(config.max_chunk_size, 1250);
        assert_eq!(config.fixed_size, 800);
        assert_eq!(config.overlap, 120);
    }

    #[test]
    fn test_small_structured_uses_structural() {
        let config = plan(1100, DocumentStructureType::Simple);
        assert_eq!(config.strategy, ChunkingStrategy::Structural);
        assert_eq!(config.min_chunk_size, 550);
        assert_eq!(config.max_chunk_size, 850);
        assert_eq!(config.fixed_size, 550);
        assert_eq!(config.sentence_window_size, 0);
    }

    #[test]
    fn test_small_target_is_floored() {
        // 1200 / 3 lands exactly on the floor
        let config = plan(1200, DocumentStructureType::None);
        assert_eq!(config.min_chunk_size, 400);
    }

    #[test]
    fn test_medium_strategy_follows_structure() {
        let cases = [
            (DocumentStructureType::Hierarchical, ChunkingStrategy::ParentDocument),
            (DocumentStructureType::Sectioned, ChunkingStrategy::Structural),
            (DocumentStructureType::Simple, ChunkingStrategy::Structural),
            (DocumentStructureType::None, ChunkingStrategy::Semantic),
        ];
        for (structure, expected) in cases {
            let config = plan(5000, structure);
            assert_eq!(config.strategy, expected, "{:?}", structure);
            assert_eq!(config.min_chunk_size, MIN_MEANINGFUL_CHUNK_SIZE);
            assert_eq!(config.max_chunk_size, MAX_CHUNK_SIZE);
            assert_eq!(config.fixed_size, PREFERRED_CHUNK_SIZE);
            assert_eq!(config.overlap, 120);
        }
    }

    #[test]
    fn test_large_documents_use_parent_document() {
        for length in [10_000, 49_999, 50_000, 250_000] {
            let config = plan(length, DocumentStructureType::None);
            assert_eq!(config.strategy, ChunkingStrategy::ParentDocument);
            assert_eq!(config.max_chunk_size, 1200);
            assert_eq!(config.min_chunk_size, 400);
        }
    }

    #[test]
    fn test_min_chunk_override_survives_every_category() {
        let overrides = ChunkingOverrides::new().with_min_chunk_size(777);
        for length in [100, 800, 2000, 5000, 20_000, 60_000] {
            let config = adaptive_chunking_strategy(
                &characteristics(length, DocumentStructureType::Sectioned),
                Some(&overrides),
            );
            assert_eq!(config.min_chunk_size, 777, "length {}", length);
        }
    }

    #[test]
    fn test_max_and_window_overrides_beat_dispatch() {
        let overrides = ChunkingOverrides::new()
            .with_max_chunk_size(900)
            .with_sentence_window_size(2);
        let config = adaptive_chunking_strategy(
            &characteristics(2500, DocumentStructureType::None),
            Some(&overrides),
        );
        assert_eq!(config.strategy, ChunkingStrategy::SentenceWindow);
        assert_eq!(config.max_chunk_size, 900);
        assert_eq!(config.sentence_window_size, 2);
        // untouched knobs still come from dispatch
        assert_eq!(config.min_chunk_size, 625);

        // large documents propose a max of their own
        let config = adaptive_chunking_strategy(
            &characteristics(20_000, DocumentStructureType::None),
            Some(&overrides),
        );
        assert_eq!(config.max_chunk_size, 900);
        assert_eq!(config.sentence_window_size, 2);
    }

    #[test]
    fn test_explicit_zero_overlap_is_kept() {
        let overrides = ChunkingOverrides::new().with_overlap(0);
        let config = adaptive_chunking_strategy(
            &characteristics(5000, DocumentStructureType::None),
            Some(&overrides),
        );
        assert_eq!(config.overlap, 0);
    }

    #[test]
    fn test_oversized_overlap_is_clamped() {
        let overrides = ChunkingOverrides::new().with_overlap(900);
        let config = adaptive_chunking_strategy(
            &characteristics(5000, DocumentStructureType::None),
            Some(&overrides),
        );
        assert_eq!(config.fixed_size, 800);
        assert_eq!(config.overlap, 799);
    }

    #[test]
    fn test_overrides_are_not_modified() {
        let overrides = ChunkingOverrides::new().with_fixed_size(300);
        let before = overrides.clone();
        let config = adaptive_chunking_strategy(
            &characteristics(20_000, DocumentStructureType::None),
            Some(&overrides),
        );
        assert_eq!(config.fixed_size, 300);
        assert_eq!(config.overlap, 45);
        assert_eq!(overrides, before);
    }

    proptest! {
        #[test]
        fn prop_overlap_below_fixed_size(
            length in 0usize..120_000,
            structure in structure_type_strategy(),
        ) {
            let config = plan(length, structure);
            if config.fixed_size > 0 {
                prop_assert!(config.overlap < config.fixed_size);
            }
        }

        #[test]
        fn prop_overlap_holds_with_overrides(
            length in 0usize..120_000,
            fixed in proptest::option::of(0usize..5000),
            overlap in proptest::option::of(0usize..5000),
        ) {
            let overrides = ChunkingOverrides { fixed_size: fixed, overlap, ..Default::default() };
            let config = adaptive_chunking_strategy(
                &characteristics(length, DocumentStructureType::None),
                Some(&overrides),
            );
            if config.fixed_size > 0 {
                prop_assert!(config.overlap < config.fixed_size);
            }
        }

        #[test]
        fn prop_plan_is_idempotent(
            length in 0usize..120_000,
            structure in structure_type_strategy(),
            min in proptest::option::of(0usize..2000),
        ) {
            let overrides = ChunkingOverrides { min_chunk_size: min, ..Default::default() };
            let c = characteristics(length, structure);
            let first = adaptive_chunking_strategy(&c, Some(&overrides));
            let second = adaptive_chunking_strategy(&c, Some(&overrides));
            prop_assert_eq!(
                serde_json::to_vec(&first).unwrap(),
                serde_json::to_vec(&second).unwrap()
            );
        }
    }
}
