//! Common test utilities for integration tests
//!
//! Provides engines with deterministic jitter and an in-memory router.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use orbit::adapters::sqlite::{create_migrated_test_pool, SqliteEssayRepository};
use orbit::{EditorHttpConfig, EditorHttpServer, EditorService, FixedJitter, ScoringConfig, ScoringEngine};
use serde_json::Value;
use tower::ServiceExt;

/// Scoring engine whose jitter always samples `value`.
pub fn fixed_engine(value: f64) -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default(), Arc::new(FixedJitter::new(value)))
}

/// Router over an in-memory archive and a midpoint-jitter engine.
pub async fn test_router() -> Router {
    let pool = create_migrated_test_pool()
        .await
        .expect("Failed to create test database");
    let service = EditorService::new(fixed_engine(0.5), Arc::new(SqliteEssayRepository::new(pool)));
    EditorHttpServer::new(service, EditorHttpConfig::default()).build_router()
}

/// Send one request and decode the JSON body.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router should not fail");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}
