//! Essay archive commands: save, history and stats.

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::adapters::sqlite::{initialize_database, SqliteEssayRepository};
use crate::cli::commands::text::TextArgs;
use crate::cli::output::{list_table, output, truncate, CommandOutput};
use crate::domain::models::{Config, EssayRecord, EssayStats, NewEssay};
use crate::services::{EditorService, ScoringEngine};

const PREVIEW_COLUMN_CHARS: usize = 60;

#[derive(Args, Debug, Default)]
pub struct SaveArgs {
    #[command(flatten)]
    pub input: TextArgs,

    /// Analysis result to store as JSON; computed from the text when omitted
    #[arg(long, value_parser = parse_json)]
    pub result: Option<Value>,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Maximum number of essays to list
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))
}

async fn open_service(config: &Config) -> Result<EditorService<SqliteEssayRepository>> {
    let pool = initialize_database(&config.database)
        .await
        .with_context(|| format!("Failed to open essay archive at {}", config.database.path))?;
    let engine = ScoringEngine::from_config(config.scoring.clone());
    Ok(EditorService::new(engine, Arc::new(SqliteEssayRepository::new(pool))))
}

#[derive(Debug, Serialize)]
pub struct SavedOutput {
    pub id: i64,
}

impl CommandOutput for SavedOutput {
    fn to_human(&self) -> String {
        format!("Essay saved with id {}", self.id)
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub created_at: String,
    pub clarity: Option<f64>,
    pub readability: Option<f64>,
    pub text: String,
}

impl From<EssayRecord> for HistoryEntry {
    fn from(record: EssayRecord) -> Self {
        let score = |key: &str| {
            record
                .result
                .as_ref()
                .and_then(|r| r.get(key))
                .and_then(Value::as_f64)
        };
        Self {
            id: record.id,
            created_at: record.created_at.format("%Y-%m-%d %H:%M").to_string(),
            clarity: score("clarity").or_else(|| score("clarity_score")),
            readability: score("readability"),
            text: record.preview(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryOutput {
    pub history: Vec<HistoryEntry>,
}

impl CommandOutput for HistoryOutput {
    fn to_human(&self) -> String {
        if self.history.is_empty() {
            return "No essays found.".to_string();
        }

        let mut table = list_table(&["id", "saved", "clarity", "readability", "preview"]);
        let cell = |score: Option<f64>| Cell::new(score.map_or_else(|| "-".to_string(), |s| s.to_string()));
        for entry in &self.history {
            table.add_row(vec![
                Cell::new(entry.id),
                Cell::new(&entry.created_at),
                cell(entry.clarity),
                cell(entry.readability),
                Cell::new(truncate(&entry.text.replace('\n', " "), PREVIEW_COLUMN_CHARS)),
            ]);
        }

        format!("{} essay(s):\n{table}", self.history.len())
    }
}

impl CommandOutput for EssayStats {
    fn to_human(&self) -> String {
        let avg = |value: Option<f64>| value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}"));
        format!(
            "Scored essays:      {}\nAverage clarity:    {}\nAverage readability: {}",
            self.total,
            avg(self.avg_clarity),
            avg(self.avg_readability)
        )
    }
}

pub async fn save(args: &SaveArgs, config: &Config, json_mode: bool) -> Result<()> {
    let input = args.input.read()?;
    let mut essay = NewEssay::new(input.into_string());
    essay.result = args.result.clone();

    let service = open_service(config).await?;
    let id = service.save(essay).await.context("Failed to save essay")?;
    output(&SavedOutput { id }, json_mode);
    Ok(())
}

pub async fn history(args: &HistoryArgs, config: &Config, json_mode: bool) -> Result<()> {
    let limit = args.limit.clamp(1, config.server.history_limit);
    let service = open_service(config).await?;
    let records = service.history(limit).await.context("Failed to list essays")?;

    let out = HistoryOutput {
        history: records.into_iter().map(HistoryEntry::from).collect(),
    };
    output(&out, json_mode);
    Ok(())
}

pub async fn stats(config: &Config, json_mode: bool) -> Result<()> {
    let service = open_service(config).await?;
    let stats = service.stats().await.context("Failed to compute archive stats")?;
    output(&stats, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn temp_config(dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.database.path = dir.join("essays.db").display().to_string();
        config
    }

    #[test]
    fn test_parse_json_arg() {
        assert_eq!(parse_json(r#"{"clarity": 3}"#).unwrap()["clarity"], 3);
        assert!(parse_json("{not json").is_err());
    }

    #[test]
    fn test_history_entry_reads_scores() {
        let record = EssayRecord {
            id: 4,
            text: "Body".to_string(),
            result: Some(json!({"clarity_score": 61, "readability": 48})),
            created_at: Utc::now(),
        };
        let entry = HistoryEntry::from(record);
        assert_eq!(entry.clarity, Some(61.0));
        assert_eq!(entry.readability, Some(48.0));
    }

    #[test]
    fn test_empty_history_human() {
        let out = HistoryOutput { history: vec![] };
        assert_eq!(out.to_human(), "No essays found.");
    }

    #[test]
    fn test_stats_human_without_scores() {
        let stats = EssayStats::from_results(std::iter::empty());
        assert!(stats.to_human().contains("n/a"));
    }

    #[tokio::test]
    async fn test_save_then_history_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(dir.path());

        let args = SaveArgs {
            input: TextArgs {
                text: Some("Saved from the command line.".to_string()),
                file: None,
            },
            result: None,
        };
        save(&args, &config, true).await.unwrap();

        let service = open_service(&config).await.unwrap();
        let records = service.history(5).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].result.as_ref().unwrap().get("readability").is_some());
    }
}
