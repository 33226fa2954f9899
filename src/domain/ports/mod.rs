//! Port trait definitions (Hexagonal Architecture)
//!
//! - JitterSource: bounded randomness feeding clarity/impact scores
//! - EssayRepository: persistence for the essay archive
//!
//! These traits keep the scoring engine and the editor service independent
//! of `rand` and `SQLite` specifics.

pub mod essay_repository;
pub mod jitter;

pub use essay_repository::EssayRepository;
pub use jitter::JitterSource;
