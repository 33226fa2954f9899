//! CLI command implementations.

pub mod archive;
pub mod serve;
pub mod text;
