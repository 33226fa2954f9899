//! Canned text rewrites: rephrase styles, grammar touch-ups, summaries and
//! tone shifts.
//!
//! Every rewrite is a fixed sequence of regular-expression substitutions or a
//! word-count truncation. Patterns are compiled once on first use; a pattern
//! that fails to compile surfaces as [`DomainError::PatternCompilation`]
//! instead of a partial result.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    GrammarCorrection, RephraseStyles, Summary, ToneTarget, ToneTransform,
};
use crate::services::text_stats;

/// Concise rewrites keep this many tenths of the words, rounded up.
const CONCISE_KEEP_TENTHS: usize = 7;

/// Characters of raw text used when a summary finds no sentences.
const SUMMARY_FALLBACK_CHARS: usize = 200;

/// Sentences kept by a summary.
const SUMMARY_SENTENCES: usize = 3;

pub const GRAMMAR_MESSAGE: &str = "Grammar corrections applied (basic).";

/// Grammar substitutions, applied in order to the output of the previous one.
const GRAMMAR_RULES: &[(&str, &str)] = &[
    (r"\bi\b", "I"),
    (r"(?i)\bim\b", "I'm"),
    (r"(?i)\bid\b", "I'd"),
    (r"(?i)\bive\b", "I've"),
    (r"(?i)\bdont\b", "don't"),
    (r"(?i)\bdidnt\b", "didn't"),
    (r"(?i)\bwasnt\b", "wasn't"),
    (r"(?i)\bcant\b", "can't"),
    (r"(?i)\bwont\b", "won't"),
    (r"(?i)\bi am\b", "I am"),
];

const CASUAL_RULES: &[(&str, &str)] = &[(r"(?i)\bdo not\b", "don't"), (r"(?i)\bI am\b", "I'm")];

struct CompiledRules {
    contraction: Regex,
    lowercase_i: Regex,
    long_word: Regex,
    grammar: Vec<(Regex, &'static str)>,
    whitespace_run: Regex,
    sentence_start: Regex,
    casual: Vec<(Regex, &'static str)>,
}

impl CompiledRules {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            contraction: Regex::new(r"(?i)\b(can|don|won)['’]?t\b")?,
            lowercase_i: Regex::new(r"\bi\b")?,
            long_word: Regex::new(r"\b\w{6,}\b")?,
            grammar: compile_rules(GRAMMAR_RULES)?,
            whitespace_run: Regex::new(r"\s{2,}")?,
            sentence_start: Regex::new(r"^\s*\w|[.!?]\s*\w")?,
            casual: compile_rules(CASUAL_RULES)?,
        })
    }
}

fn compile_rules(rules: &[(&str, &'static str)]) -> Result<Vec<(Regex, &'static str)>, regex::Error> {
    rules
        .iter()
        .map(|(pattern, replacement)| Ok((Regex::new(pattern)?, *replacement)))
        .collect()
}

static RULES: LazyLock<Result<CompiledRules, regex::Error>> = LazyLock::new(CompiledRules::compile);

fn rules() -> DomainResult<&'static CompiledRules> {
    RULES
        .as_ref()
        .map_err(|e| DomainError::PatternCompilation(e.to_string()))
}

fn apply_rules(text: &str, rules: &[(Regex, &'static str)]) -> String {
    rules.iter().fold(text.to_string(), |acc, (pattern, replacement)| {
        pattern.replace_all(&acc, *replacement).into_owned()
    })
}

/// Rewrite `text` in each rephrase style.
pub fn rephrase(text: &str) -> DomainResult<RephraseStyles> {
    let rules = rules()?;
    let styles = RephraseStyles {
        formal: formalize(rules, text),
        creative: rules
            .long_word
            .replace_all(text, |caps: &Captures| caps[0].to_uppercase())
            .into_owned(),
        concise: truncate_words(text),
    };

    tracing::debug!(chars = text.len(), "rephrased essay");
    Ok(styles)
}

/// Apply the ordered grammar rules, then normalise spacing and capitals.
pub fn correct_grammar(text: &str) -> DomainResult<GrammarCorrection> {
    let rules = rules()?;

    let expanded = apply_rules(text, &rules.grammar);
    let collapsed = rules.whitespace_run.replace_all(&expanded, " ");
    let corrected = rules
        .sentence_start
        .replace_all(collapsed.trim(), |caps: &Captures| caps[0].to_uppercase())
        .into_owned();

    tracing::debug!(
        before = text.len(),
        after = corrected.len(),
        "grammar corrections applied"
    );

    Ok(GrammarCorrection {
        corrected,
        message: GRAMMAR_MESSAGE.to_string(),
    })
}

/// First sentences of the text, or its opening characters if it has none.
pub fn summarize(text: &str) -> Summary {
    let sentences = text_stats::sentences(text);
    let summary: String = if sentences.is_empty() {
        text.chars().take(SUMMARY_FALLBACK_CHARS).collect()
    } else {
        sentences
            .iter()
            .take(SUMMARY_SENTENCES)
            .copied()
            .collect::<Vec<_>>()
            .join(". ")
    };

    Summary { summary }
}

/// Shift the register of `text`; `None` leaves it untouched.
pub fn transform_tone(text: &str, tone: Option<ToneTarget>) -> DomainResult<ToneTransform> {
    let transformed = match tone {
        Some(ToneTarget::Formal) => formalize(rules()?, text),
        Some(ToneTarget::Casual) => apply_rules(text, &rules()?.casual),
        Some(ToneTarget::Concise) => truncate_words(text),
        None => text.to_string(),
    };

    Ok(ToneTransform { transformed })
}

/// Expand contractions to their full forms and capitalise a standalone `i`.
fn formalize(rules: &CompiledRules, text: &str) -> String {
    let expanded = rules.contraction.replace_all(text, |caps: &Captures| {
        let full = match caps[1].to_lowercase().as_str() {
            "can" => "cannot",
            "won" => "will not",
            _ => "do not",
        };
        match_leading_case(&caps[0], full)
    });

    rules.lowercase_i.replace_all(&expanded, "I").into_owned()
}

/// Capitalise `replacement` when `original` starts with an uppercase letter.
fn match_leading_case(original: &str, replacement: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }

    let mut chars = replacement.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Keep the first `ceil(0.7 * n)` whitespace-delimited words.
pub fn truncate_words(text: &str) -> String {
    let words = text_stats::words(text);
    let keep = (words.len() * CONCISE_KEEP_TENTHS).div_ceil(10);
    words[..keep].join(" ")
}
