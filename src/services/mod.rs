pub mod editor_service;
pub mod jitter;
pub mod rewrite;
pub mod scoring;
pub mod text_stats;

pub use editor_service::EditorService;
pub use jitter::{jitter_from_config, FixedJitter, SeededJitter, ThreadRngJitter};
pub use scoring::ScoringEngine;
