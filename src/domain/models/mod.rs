pub mod analysis;
pub mod config;
pub mod essay;
pub mod input;
pub mod transform;

pub use analysis::{AnalysisReport, TextMetrics, ToneLabel};
pub use config::{
    Config, DatabaseConfig, JitterMode, LoggingConfig, ScoringConfig, ServerConfig,
};
pub use essay::{EssayRecord, EssayStats, NewEssay};
pub use input::EssayInput;
pub use transform::{GrammarCorrection, RephraseStyles, Summary, ToneTarget, ToneTransform};
