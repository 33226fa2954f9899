//! Domain layer for the Orbit essay editor
//!
//! This module contains the value records the engine produces, the boundary
//! input coercion, and the port traits adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
