/// Average sentence length (in words) at which complexity saturates
const SATURATION_WORDS_PER_SENTENCE: f64 = 15.0;

/// Coarse complexity score in `[0.0, 1.0]` based on sentence length.
///
/// Words are whitespace separated tokens and sentences are the pieces left
/// after splitting on `.`, so abbreviations count as sentence ends. Text
/// without words scores 0.0.
pub fn calculate_complexity(content: &str) -> f64 {
    let words = content.split_whitespace().count();
    if words == 0 {
        return 0.0;
    }

    // split always yields at least one piece
    let sentences = content.split('.').count();
    let avg_words_per_sentence = words as f64 / sentences as f64;

    (avg_words_per_sentence / SATURATION_WORDS_PER_SENTENCE).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_and_blank_are_zero() {
        assert_eq!(calculate_complexity(""), 0.0);
        assert_eq!(calculate_complexity(" \n\t "), 0.0);
    }

    #[test]
    fn test_short_sentences() {
        // 6 words over 3 pieces ("a b c", " d e f", "")
        let score = calculate_complexity("a b c. d e f.");
        assert!((score - 2.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_long_sentence_saturates() {
        let text = vec!["word"; 40].join(" ");
        assert_eq!(calculate_complexity(&text), 1.0);
    }

    proptest! {
        #[test]
        fn prop_complexity_in_unit_range(text in ".{0,400}") {
            let score = calculate_complexity(&text);
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
