//! Document analysis: size category, structure and complexity.

mod complexity;
mod structure;

pub use complexity::calculate_complexity;
pub use structure::{analyze_structure, hierarchical_signal_count, section_signal_count};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (exclusive) of very small documents, in characters
pub const VERY_SMALL_DOC: usize = 1000;
/// Upper bound (exclusive) of small documents
pub const SMALL_DOC: usize = 3000;
/// Upper bound (exclusive) of medium documents
pub const MEDIUM_DOC: usize = 10000;
/// Upper bound (exclusive) of large documents
pub const LARGE_DOC: usize = 50000;

/// Language reported for every document; detection is not performed.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Size category of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    VerySmall,
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl DocumentCategory {
    /// Category for a document of `length` characters
    pub fn from_length(length: usize) -> Self {
        match length {
            l if l < VERY_SMALL_DOC => Self::VerySmall,
            l if l < SMALL_DOC => Self::Small,
            l if l < MEDIUM_DOC => Self::Medium,
            l if l < LARGE_DOC => Self::Large,
            _ => Self::VeryLarge,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VerySmall => "very_small",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::VeryLarge => "very_large",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detected document structure, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStructureType {
    None,
    Simple,
    Sectioned,
    Hierarchical,
}

impl DocumentStructureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Simple => "simple",
            Self::Sectioned => "sectioned",
            Self::Hierarchical => "hierarchical",
        }
    }
}

impl fmt::Display for DocumentStructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties of a document that drive the chunking plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentCharacteristics {
    /// Length in characters
    pub length: usize,
    pub category: DocumentCategory,
    pub has_structure: bool,
    pub structure_type: DocumentStructureType,
    pub language: String,
    /// Sentence-density proxy in `[0.0, 1.0]`
    pub complexity: f64,
}

/// Analyze `content`. Never fails; empty input yields a very small,
/// unstructured document with zero complexity.
pub fn analyze_document(content: &str) -> DocumentCharacteristics {
    let length = content.chars().count();
    let (structure_type, has_structure) = analyze_structure(content);

    DocumentCharacteristics {
        length,
        category: DocumentCategory::from_length(length),
        has_structure,
        structure_type,
        language: DEFAULT_LANGUAGE.to_string(),
        complexity: calculate_complexity(content),
    }
}
