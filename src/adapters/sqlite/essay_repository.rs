//! SQLite implementation of the EssayRepository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::adapters::sqlite::{parse_datetime, parse_optional_json};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{EssayRecord, EssayStats, NewEssay};
use crate::domain::ports::EssayRepository;

pub struct SqliteEssayRepository {
    pool: SqlitePool,
}

impl SqliteEssayRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EssayRepository for SqliteEssayRepository {
    async fn save(&self, essay: &NewEssay) -> DomainResult<i64> {
        let result = essay
            .result
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let done = sqlx::query("INSERT INTO essays (text, result, created_at) VALUES (?, ?, ?)")
            .bind(&essay.text)
            .bind(result)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(done.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> DomainResult<Option<EssayRecord>> {
        let row: Option<EssayRow> = sqlx::query_as(
            "SELECT id, text, result, created_at FROM essays WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn recent(&self, limit: usize) -> DomainResult<Vec<EssayRecord>> {
        let limit = i64::try_from(limit)
            .map_err(|_| DomainError::InvalidInput(format!("limit out of range: {limit}")))?;

        let rows: Vec<EssayRow> = sqlx::query_as(
            "SELECT id, text, result, created_at FROM essays ORDER BY id DESC LIMIT ?"
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn stats(&self) -> DomainResult<EssayStats> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT result FROM essays WHERE result IS NOT NULL"
        )
        .fetch_all(&self.pool)
        .await?;

        let results = rows
            .into_iter()
            .map(|(raw,)| serde_json::from_str(&raw))
            .collect::<Result<Vec<serde_json::Value>, _>>()?;

        Ok(EssayStats::from_results(&results))
    }
}

#[derive(sqlx::FromRow)]
struct EssayRow {
    id: i64,
    text: String,
    result: Option<String>,
    created_at: String,
}

impl TryFrom<EssayRow> for EssayRecord {
    type Error = DomainError;

    fn try_from(row: EssayRow) -> Result<Self, Self::Error> {
        Ok(EssayRecord {
            id: row.id,
            text: row.text,
            result: parse_optional_json(row.result)?,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::create_migrated_test_pool;
    use serde_json::json;

    async fn setup_test_repo() -> SqliteEssayRepository {
        let pool = create_migrated_test_pool().await.unwrap();
        SqliteEssayRepository::new(pool)
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let repo = setup_test_repo().await;
        let essay = NewEssay::new("My essay.").with_result(json!({"clarity": 70}));

        let id = repo.save(&essay).await.unwrap();
        let record = repo.get(id).await.unwrap().unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.text, "My essay.");
        assert_eq!(record.result, Some(json!({"clarity": 70})));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = setup_test_repo().await;
        assert!(repo.get(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_recent_newest_first_with_limit() {
        let repo = setup_test_repo().await;
        for i in 0..5 {
            repo.save(&NewEssay::new(format!("essay {i}"))).await.unwrap();
        }

        let recent = repo.recent(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].text, "essay 4");
        assert_eq!(recent[2].text, "essay 2");
        assert!(recent[0].result.is_none());
    }

    #[tokio::test]
    async fn test_stats_skip_essays_without_result() {
        let repo = setup_test_repo().await;
        repo.save(&NewEssay::new("bare")).await.unwrap();
        repo.save(&NewEssay::new("scored").with_result(json!({"clarity": 90, "readability": 65})))
            .await
            .unwrap();

        let stats = repo.stats().await.unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.avg_clarity, Some(90.0));
        assert_eq!(stats.avg_readability, Some(65.0));
    }
}
