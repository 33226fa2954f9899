//! Editor service tying the scoring engine, the rewrite rules and the essay
//! archive together behind one request-level API.

use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{
    AnalysisReport, EssayInput, EssayRecord, EssayStats, GrammarCorrection, NewEssay,
    RephraseStyles, Summary, ToneTarget, ToneTransform,
};
use crate::domain::ports::EssayRepository;
use crate::services::rewrite;
use crate::services::scoring::ScoringEngine;

pub struct EditorService<R: EssayRepository> {
    engine: ScoringEngine,
    repository: Arc<R>,
}

impl<R: EssayRepository> EditorService<R> {
    pub fn new(engine: ScoringEngine, repository: Arc<R>) -> Self {
        Self { engine, repository }
    }

    pub fn analyze(&self, input: &EssayInput) -> AnalysisReport {
        self.engine.analyze(input.as_str())
    }

    pub fn rephrase(&self, input: &EssayInput) -> DomainResult<RephraseStyles> {
        rewrite::rephrase(input.as_str())
    }

    pub fn correct_grammar(&self, input: &EssayInput) -> DomainResult<GrammarCorrection> {
        rewrite::correct_grammar(input.as_str())
    }

    pub fn summarize(&self, input: &EssayInput) -> Summary {
        rewrite::summarize(input.as_str())
    }

    /// Shift tone; a missing tone means formal, an unknown one is a no-op.
    pub fn transform(&self, input: &EssayInput, tone: Option<&str>) -> DomainResult<ToneTransform> {
        let target = ToneTarget::resolve(tone);
        if target.is_none() {
            tracing::debug!(tone = ?tone, "unrecognised tone, passing text through");
        }
        rewrite::transform_tone(input.as_str(), target)
    }

    /// Archive an essay, analyzing it first when no result was supplied.
    pub async fn save(&self, mut essay: NewEssay) -> DomainResult<i64> {
        essay.validate()?;

        if essay.result.is_none() {
            let report = self.engine.analyze(&essay.text);
            essay.result = Some(serde_json::to_value(report)?);
        }

        let id = self.repository.save(&essay).await?;
        tracing::info!(essay_id = id, chars = essay.text.len(), "essay archived");
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> DomainResult<Option<EssayRecord>> {
        self.repository.get(id).await
    }

    pub async fn history(&self, limit: usize) -> DomainResult<Vec<EssayRecord>> {
        self.repository.recent(limit).await
    }

    pub async fn stats(&self) -> DomainResult<EssayStats> {
        self.repository.stats().await
    }
}
