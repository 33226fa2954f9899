//! Analysis report domain model.
//!
//! An [`AnalysisReport`] is the fixed-shape result of scoring one essay. It is
//! created fresh per request and carries no identity of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw counts the scores are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Whitespace-delimited, non-empty tokens.
    pub word_count: usize,
    /// Sentence segments, never less than 1.
    pub sentence_count: usize,
    /// Vowel-cluster approximation of syllables.
    pub syllable_count: usize,
    /// Words per sentence, rounded to one decimal.
    pub avg_words_per_sentence: f64,
}

impl TextMetrics {
    /// Metrics of an empty text.
    pub const fn empty() -> Self {
        Self {
            word_count: 0,
            sentence_count: 1,
            syllable_count: 0,
            avg_words_per_sentence: 0.0,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Coarse writing-register label chosen by word-count brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToneLabel {
    #[serde(rename = "Persuasive / Confident")]
    PersuasiveConfident,
    #[serde(rename = "Formal / Reflective")]
    FormalReflective,
    #[serde(rename = "Concise / Neutral")]
    ConciseNeutral,
}

impl ToneLabel {
    /// Pick the label for a word count.
    ///
    /// Counts strictly above `long_threshold` are persuasive, strictly above
    /// `medium_threshold` formal, everything else concise.
    pub const fn for_word_count(
        word_count: usize,
        medium_threshold: usize,
        long_threshold: usize,
    ) -> Self {
        if word_count > long_threshold {
            Self::PersuasiveConfident
        } else if word_count > medium_threshold {
            Self::FormalReflective
        } else {
            Self::ConciseNeutral
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PersuasiveConfident => "Persuasive / Confident",
            Self::FormalReflective => "Formal / Reflective",
            Self::ConciseNeutral => "Concise / Neutral",
        }
    }

}

impl fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic writing-quality feedback for one essay.
///
/// `clarity`, `impact` and `readability` always lie in `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub clarity: u8,
    pub impact: u8,
    /// Flesch Reading Ease estimate, clamped for display.
    pub readability: u8,
    pub tone: ToneLabel,
    pub suggestions: Vec<String>,
    pub metrics: TextMetrics,
}
