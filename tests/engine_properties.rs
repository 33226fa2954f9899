//! Property tests for the scoring engine and the rewrite rules.

mod common;

use common::fixed_engine;
use orbit::services::{rewrite, text_stats};
use orbit::ToneTarget;
use proptest::prelude::*;

fn essay_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z']{1,12}[.!?,]?", 0..80).prop_map(|words| words.join(" "))
}

proptest! {
    /// Property: every score stays within 0..=100 for any jitter sample
    #[test]
    fn prop_scores_bounded(text in essay_text(), jitter in 0.0f64..1.0) {
        let report = fixed_engine(jitter).analyze(&text);
        prop_assert!(report.clarity <= 100);
        prop_assert!(report.impact <= 100);
        prop_assert!(report.readability <= 100);
    }

    /// Property: the generic advice always closes the suggestion list
    #[test]
    fn prop_suggestions_end_with_generic_advice(text in essay_text()) {
        let report = fixed_engine(0.5).analyze(&text);
        prop_assert!(report.suggestions.len() >= 4);
        prop_assert_eq!(
            report.suggestions.last().map(String::as_str),
            Some("Use transition words to connect ideas smoothly.")
        );
    }

    /// Property: sentence count is never zero
    #[test]
    fn prop_sentence_count_positive(text in ".{0,200}") {
        prop_assert!(text_stats::sentence_count(&text) >= 1);
    }

    /// Property: concise keeps ceil(0.7 * n) words
    #[test]
    fn prop_concise_word_count(text in essay_text()) {
        let n = text_stats::word_count(&text);
        let concise = rewrite::rephrase(&text).unwrap().concise;
        prop_assert_eq!(text_stats::word_count(&concise), (n * 7).div_ceil(10));
    }

    /// Property: grammar correction is a fixed point after one pass
    #[test]
    fn prop_grammar_idempotent(text in essay_text()) {
        let once = rewrite::correct_grammar(&text).unwrap().corrected;
        let twice = rewrite::correct_grammar(&once).unwrap().corrected;
        prop_assert_eq!(once, twice);
    }

    /// Property: an unrecognised tone returns the text unchanged
    #[test]
    fn prop_unknown_tone_is_identity(text in essay_text(), tone in "[a-z]{1,10}") {
        prop_assume!(ToneTarget::from_str(&tone).is_none());
        let out = rewrite::transform_tone(&text, ToneTarget::resolve(Some(&tone))).unwrap();
        prop_assert_eq!(out.transformed, text);
    }

    /// Property: summaries hold at most three sentences
    #[test]
    fn prop_summary_at_most_three_sentences(text in essay_text()) {
        let summary = rewrite::summarize(&text).summary;
        prop_assert!(text_stats::sentences(&summary).len() <= 3);
    }
}
