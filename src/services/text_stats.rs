//! Word, sentence and syllable counting.
//!
//! These are the counts every score derives from. They are approximations:
//! sentences end at any run of `.`, `!` or `?`, and syllables are vowel
//! clusters of at most two letters.

use crate::domain::models::TextMetrics;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];
const VOWELS: &[u8] = b"aeiouy";

/// Whitespace-delimited, non-empty tokens in order.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sentence segments, trimmed, with blank segments dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Number of sentences, never less than 1.
pub fn sentence_count(text: &str) -> usize {
    sentences(text).len().max(1)
}

/// Count `[aeiouy]{1,2}` matches, case-insensitively.
///
/// A run of `n` consecutive vowels yields `ceil(n / 2)` matches.
pub fn syllable_count(text: &str) -> usize {
    let mut count = 0_usize;
    let mut run = 0_usize;

    for ch in text.chars() {
        let is_vowel = ch.is_ascii() && VOWELS.contains(&(ch.to_ascii_lowercase() as u8));
        if is_vowel {
            run += 1;
        } else if run > 0 {
            count += run.div_ceil(2);
            run = 0;
        }
    }

    count + run.div_ceil(2)
}

/// All counts for a text; trimmed-empty text yields [`TextMetrics::empty`].
pub fn measure(text: &str) -> TextMetrics {
    let text = text.trim();
    if text.is_empty() {
        return TextMetrics::empty();
    }

    let word_count = word_count(text);
    let sentence_count = sentence_count(text);
    let avg = word_count as f64 / sentence_count as f64;

    TextMetrics {
        word_count,
        sentence_count,
        syllable_count: syllable_count(text),
        avg_words_per_sentence: (avg * 10.0).round() / 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  one \t two\n\nthree  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_sentences_split_on_terminator_runs() {
        assert_eq!(sentences("A. B. C. D."), vec!["A", "B", "C", "D"]);
        assert_eq!(sentences("Wait?! Really... yes"), vec!["Wait", "Really", "yes"]);
        assert!(sentences("...").is_empty());
    }

    #[test]
    fn test_sentence_count_minimum_one() {
        assert_eq!(sentence_count(""), 1);
        assert_eq!(sentence_count("?!"), 1);
        assert_eq!(sentence_count("no terminator"), 1);
        assert_eq!(sentence_count("One. Two! Three?"), 3);
    }

    #[test]
    fn test_syllable_clusters() {
        // "beautiful": eau -> "ea" + "u", then "i", "u" => 4
        assert_eq!(syllable_count("beautiful"), 4);
        assert_eq!(syllable_count("cat"), 1);
        assert_eq!(syllable_count("rhythm"), 1);
        assert_eq!(syllable_count("QUEUE"), 2);
        assert_eq!(syllable_count("xyz"), 1);
        assert_eq!(syllable_count(""), 0);
    }

    #[test]
    fn test_syllable_runs_at_end_of_text() {
        // trailing run of 5 vowels -> ceil(5 / 2) = 3
        assert_eq!(syllable_count("aaaaa"), 3);
        assert_eq!(syllable_count("ooh aah ee"), 3);
        assert_eq!(syllable_count("idea"), 2);
    }

    #[test]
    fn test_measure_empty() {
        assert_eq!(measure("   "), TextMetrics::empty());
    }

    #[test]
    fn test_measure_counts() {
        let metrics = measure("The cat sat. The dog ran away!");
        assert_eq!(metrics.word_count, 7);
        assert_eq!(metrics.sentence_count, 2);
        assert!((metrics.avg_words_per_sentence - 3.5).abs() < f64::EPSILON);
    }
}
