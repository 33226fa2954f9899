//! Essay archive repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{EssayRecord, EssayStats, NewEssay};

/// Repository interface for archived essays.
#[async_trait]
pub trait EssayRepository: Send + Sync {
    /// Store an essay and return its id.
    async fn save(&self, essay: &NewEssay) -> DomainResult<i64>;

    /// Get an essay by id.
    async fn get(&self, id: i64) -> DomainResult<Option<EssayRecord>>;

    /// Most recent essays, newest first.
    async fn recent(&self, limit: usize) -> DomainResult<Vec<EssayRecord>>;

    /// Averages over every essay stored with a result.
    async fn stats(&self) -> DomainResult<EssayStats>;
}
