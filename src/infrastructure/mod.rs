//! Infrastructure layer module
//!
//! Process-wide concerns that sit outside the domain:
//! - Configuration loading and validation
//! - Logging setup
pub mod config;
pub mod logging;
