use std::collections::HashMap;

/// Keywords attached to each chunk
pub const DEFAULT_KEYWORD_LIMIT: usize = 5;

const STOP_WORDS: &[&str] = &[
    "about", "after", "also", "been", "before", "being", "both", "could", "does", "each", "from",
    "have", "here", "into", "just", "more", "most", "much", "only", "other", "over", "same",
    "should", "some", "such", "than", "that", "their", "them", "then", "there", "these", "they",
    "this", "those", "very", "were", "what", "when", "where", "which", "while", "will", "with",
    "would", "your",
];

/// Most frequent content words of `text`, lowercased.
///
/// Words are runs of alphabetic characters longer than three characters
/// that are not stop words. Ties are broken alphabetically so the result is
/// deterministic.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for word in text.split(|c: char| !c.is_alphabetic()) {
        if word.chars().count() <= 3 {
            continue;
        }
        let word = word.to_lowercase();
        if STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(limit).map(|(word, _)| word).collect()
}
