use regex::Regex;
use std::sync::LazyLock;

use super::DocumentStructureType;

/// Patterns signalling multiple heading levels; counted once per pattern
const HIERARCHICAL_PATTERNS: [&str; 4] = [
    r"(?m)^#+\s+",            // markdown headers
    r"(?m)^[A-Z][A-Z\s]+:?$", // ALL CAPS headings
    r"(?m)^\d+\.\s+[A-Z]",    // numbered sections
    r"(?m)^[IVX]+\.\s+",      // roman numerals
];

/// Patterns signalling sections; every match counts
const SECTION_PATTERNS: [&str; 3] = [
    r"(?i)\b(experience|education|skills|summary|objective|projects|achievements|awards|certifications|languages|references|contact|about)\b",
    r"(?m)^[A-Z][A-Z\s]{3,}:?\s*$",
    r"(?m)^.{1,50}:$",
];

struct StructureSignals {
    hierarchical: Vec<Regex>,
    section: Vec<Regex>,
}

static SIGNALS: LazyLock<StructureSignals> = LazyLock::new(|| StructureSignals {
    hierarchical: compile_all(&HIERARCHICAL_PATTERNS),
    section: compile_all(&SECTION_PATTERNS),
});

/// Compile the given patterns, dropping (and logging) any that fail.
/// A dropped pattern simply never matches.
fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(pattern, error = %e, "structural pattern failed to compile");
                None
            }
        })
        .collect()
}

/// Number of hierarchical patterns that match at least once (0..=4)
pub fn hierarchical_signal_count(content: &str) -> usize {
    SIGNALS
        .hierarchical
        .iter()
        .filter(|re| re.is_match(content))
        .count()
}

/// Total number of section pattern matches across all patterns
pub fn section_signal_count(content: &str) -> usize {
    SIGNALS
        .section
        .iter()
        .map(|re| re.find_iter(content).count())
        .sum()
}

/// Classify the structure of `content`, returning the structure type and
/// whether any structure was found.
pub fn analyze_structure(content: &str) -> (DocumentStructureType, bool) {
    let structure_count = hierarchical_signal_count(content);
    let section_count = section_signal_count(content);

    if structure_count >= 3 || section_count >= 5 {
        (DocumentStructureType::Hierarchical, true)
    } else if structure_count >= 1 || section_count >= 2 {
        (DocumentStructureType::Sectioned, true)
    } else if content.matches("\n\n").count() >= 3 {
        (DocumentStructureType::Simple, true)
    } else {
        (DocumentStructureType::None, false)
    }
}
