//! Archived essays and archive statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::{DomainError, DomainResult};

/// Characters of essay text shown in history listings.
pub const PREVIEW_CHARS: usize = 800;

/// An essay submitted for archiving.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEssay {
    pub text: String,
    /// Analysis result to store alongside the text, if the caller has one.
    pub result: Option<Value>,
}

impl NewEssay {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            result: None,
        }
    }

    pub fn with_result(mut self, result: Value) -> Self {
        self.result = Some(result);
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.text.trim().is_empty() {
            return Err(DomainError::InvalidInput("text required".to_string()));
        }
        Ok(())
    }
}

/// An essay as stored in the archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayRecord {
    pub id: i64,
    pub text: String,
    pub result: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl EssayRecord {
    /// Text cut to [`PREVIEW_CHARS`] characters, with an ellipsis when cut.
    pub fn preview(&self) -> String {
        if self.text.chars().count() > PREVIEW_CHARS {
            let head: String = self.text.chars().take(PREVIEW_CHARS).collect();
            format!("{head}...")
        } else {
            self.text.clone()
        }
    }
}

/// Aggregate scores over every archived essay that has a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayStats {
    pub total: u64,
    pub avg_clarity: Option<f64>,
    pub avg_readability: Option<f64>,
}

impl EssayStats {
    /// Fold stored results into averages rounded to one decimal.
    ///
    /// Results written by older clients carry `clarity_score` instead of
    /// `clarity`; missing scores count as zero.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut total = 0_u64;
        let mut clarity_sum = 0.0;
        let mut readability_sum = 0.0;

        for result in results {
            clarity_sum += score_field(result, &["clarity", "clarity_score"]);
            readability_sum += score_field(result, &["readability"]);
            total += 1;
        }

        if total == 0 {
            return Self {
                total,
                avg_clarity: None,
                avg_readability: None,
            };
        }

        Self {
            total,
            avg_clarity: Some(round_one_decimal(clarity_sum / total as f64)),
            avg_readability: Some(round_one_decimal(readability_sum / total as f64)),
        }
    }
}

fn score_field(result: &Value, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| result.get(*key).and_then(Value::as_f64))
        .unwrap_or(0.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(text: &str) -> EssayRecord {
        EssayRecord {
            id: 1,
            text: text.to_string(),
            result: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_rejects_blank_text() {
        assert!(NewEssay::new("   ").validate().is_err());
        assert!(NewEssay::new("An essay.").validate().is_ok());
    }

    #[test]
    fn test_preview_short_text_untouched() {
        assert_eq!(record("short").preview(), "short");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let text = "é".repeat(PREVIEW_CHARS + 5);
        let preview = record(&text).preview();
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_stats_empty() {
        let stats = EssayStats::from_results(std::iter::empty());
        assert_eq!(stats.total, 0);
        assert!(stats.avg_clarity.is_none());
        assert!(stats.avg_readability.is_none());
    }

    #[test]
    fn test_stats_averages() {
        let results = [
            json!({"clarity": 80, "readability": 60}),
            json!({"clarity_score": 71, "readability": 55.5}),
            json!({"tone": "Concise / Neutral"}),
        ];
        let stats = EssayStats::from_results(results.iter());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.avg_clarity, Some(50.3));
        assert_eq!(stats.avg_readability, Some(38.5));
    }
}
