//! Adapters for external systems: the HTTP surface and the `SQLite` archive.

pub mod http;
pub mod sqlite;
