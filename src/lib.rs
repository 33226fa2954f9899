//! Orbit - essay editor backend
//!
//! Orbit scores essays with cheap heuristics (Flesch-style readability,
//! jittered clarity and impact, a word-count tone label) and offers canned
//! rewrites: three rephrase styles, a basic grammar pass, first-sentences
//! summaries and tone shifts. Saved essays live in a `SQLite` archive.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors and port traits
//! - **Service Layer** (`services`): scoring engine, rewrite rules, editor service
//! - **Adapters** (`adapters`): axum HTTP server and `SQLite` archive
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use orbit::{FixedJitter, ScoringConfig, ScoringEngine};
//!
//! let engine = ScoringEngine::new(ScoringConfig::default(), Arc::new(FixedJitter::midpoint()));
//! let report = engine.analyze("Short essays read easily. They also end quickly.");
//! assert!(report.readability <= 100);
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::http::{EditorHttpConfig, EditorHttpServer};
pub use adapters::sqlite::SqliteEssayRepository;
pub use domain::models::{
    AnalysisReport, Config, DatabaseConfig, EssayInput, EssayRecord, EssayStats,
    GrammarCorrection, JitterMode, LoggingConfig, NewEssay, RephraseStyles, ScoringConfig,
    ServerConfig, Summary, ToneLabel, ToneTarget, ToneTransform,
};
pub use domain::ports::{EssayRepository, JitterSource};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{EditorService, FixedJitter, ScoringEngine, SeededJitter, ThreadRngJitter};
