//! Heuristic essay scoring.
//!
//! Readability is a Flesch Reading Ease estimate over approximate counts.
//! Clarity and impact are base constants plus jitter, minus a short-essay
//! penalty that vanishes once the essay reaches a length threshold:
//!
//! ```text
//! readability = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / max(words, 1))
//! clarity     = 60 + r1 * 40 - max(0, 100 - words) * 0.02
//! impact      = 55 + r2 * 45 - max(0, 120 - words) * 0.015
//! ```

use std::sync::Arc;

use crate::domain::models::{AnalysisReport, ScoringConfig, TextMetrics, ToneLabel};
use crate::domain::ports::JitterSource;
use crate::services::jitter::jitter_from_config;
use crate::services::text_stats;

const FLESCH_BASE: f64 = 206.835;
const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;
const FLESCH_SYLLABLE_WEIGHT: f64 = 84.6;

const CLARITY_BASE: f64 = 60.0;
const CLARITY_SPREAD: f64 = 40.0;
const CLARITY_TARGET_WORDS: f64 = 100.0;
const CLARITY_SHORTFALL_PENALTY: f64 = 0.02;

const IMPACT_BASE: f64 = 55.0;
const IMPACT_SPREAD: f64 = 45.0;
const IMPACT_TARGET_WORDS: f64 = 120.0;
const IMPACT_SHORTFALL_PENALTY: f64 = 0.015;

const SHORT_ESSAY_WORDS: usize = 200;
const LONG_SENTENCE_WORDS: f64 = 25.0;
const LOW_READABILITY: u8 = 50;

/// Advice appended to every report, in order.
pub const GENERIC_SUGGESTIONS: [&str; 4] = [
    "Add specific examples to strengthen your argument.",
    "Vary sentence structure for improved readability.",
    "Conclude with a clear and impactful statement.",
    "Use transition words to connect ideas smoothly.",
];

/// Scores essays.
///
/// Stateless apart from the jitter source, so one engine is shared across
/// concurrent requests.
#[derive(Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
    jitter: Arc<dyn JitterSource>,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig, jitter: Arc<dyn JitterSource>) -> Self {
        Self { config, jitter }
    }

    /// Engine with the jitter source the configuration names.
    pub fn from_config(config: ScoringConfig) -> Self {
        let jitter = jitter_from_config(&config);
        Self::new(config, jitter)
    }

    /// Produce the full analysis report for a text.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let metrics = text_stats::measure(text);
        let words = metrics.word_count as f64;

        let readability = readability(&metrics);
        let clarity = jittered_score(
            CLARITY_BASE,
            CLARITY_SPREAD,
            self.jitter.sample(),
            (CLARITY_TARGET_WORDS - words).max(0.0) * CLARITY_SHORTFALL_PENALTY,
        );
        let impact = jittered_score(
            IMPACT_BASE,
            IMPACT_SPREAD,
            self.jitter.sample(),
            (IMPACT_TARGET_WORDS - words).max(0.0) * IMPACT_SHORTFALL_PENALTY,
        );
        let tone = ToneLabel::for_word_count(
            metrics.word_count,
            self.config.medium_threshold,
            self.config.long_threshold,
        );
        let suggestions = suggestions(text, &metrics, readability);

        tracing::debug!(
            words = metrics.word_count,
            sentences = metrics.sentence_count,
            syllables = metrics.syllable_count,
            readability,
            clarity,
            impact,
            tone = %tone,
            "essay analyzed"
        );

        AnalysisReport {
            clarity,
            impact,
            readability,
            tone,
            suggestions,
            metrics,
        }
    }
}

impl std::fmt::Debug for ScoringEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Flesch Reading Ease, clamped to `0..=100` and rounded.
///
/// A zero words-per-sentence ratio counts as 1, so empty text scores 100.
pub fn readability(metrics: &TextMetrics) -> u8 {
    let words = metrics.word_count as f64;
    let sentences = metrics.sentence_count.max(1) as f64;
    let syllables = metrics.syllable_count as f64;

    let mut words_per_sentence = words / sentences;
    if words_per_sentence == 0.0 {
        words_per_sentence = 1.0;
    }

    let score = FLESCH_BASE
        - FLESCH_SENTENCE_WEIGHT * words_per_sentence
        - FLESCH_SYLLABLE_WEIGHT * (syllables / words.max(1.0));

    to_percent(score)
}

fn jittered_score(base: f64, spread: f64, sample: f64, penalty: f64) -> u8 {
    to_percent(base + sample * spread - penalty)
}

fn to_percent(score: f64) -> u8 {
    score.clamp(0.0, 100.0).round() as u8
}

/// Feature-driven hints first, then [`GENERIC_SUGGESTIONS`].
fn suggestions(text: &str, metrics: &TextMetrics, readability: u8) -> Vec<String> {
    let mut hints = Vec::new();

    if !metrics.is_empty() && metrics.word_count < SHORT_ESSAY_WORDS {
        hints.push("Essay is short; expand your arguments and add examples.".to_string());
    }
    if metrics.avg_words_per_sentence > LONG_SENTENCE_WORDS {
        hints.push("Some sentences are very long. Try splitting them for clarity.".to_string());
    }
    if text.to_lowercase().contains("very ") {
        hints.push(
            "Avoid weak intensifiers like 'very'; use stronger, specific words.".to_string(),
        );
    }
    if readability < LOW_READABILITY {
        hints.push(
            "Consider simpler sentence structure for readability (aim for Flesch > 50)."
                .to_string(),
        );
    }

    hints.extend(GENERIC_SUGGESTIONS.iter().map(|s| (*s).to_string()));
    hints
}
