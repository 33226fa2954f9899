//! HTTP adapter.
//!
//! Serves the editor client: the text operations of the scoring engine plus
//! the essay archive.

pub mod editor_http;

pub use editor_http::{EditorHttpConfig, EditorHttpServer, ErrorResponse};
