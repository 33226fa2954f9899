//! Editor HTTP Server.
//!
//! Exposes the scoring engine and the essay archive to the editor client as
//! JSON endpoints under `/api`.

use axum::{
    body::Bytes,
    extract::{FromRequest, Path, Query, Request, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::errors::DomainError;
use crate::domain::models::{
    AnalysisReport, EssayInput, EssayRecord, EssayStats, GrammarCorrection, NewEssay,
    RephraseStyles, ServerConfig, Summary, ToneTransform,
};
use crate::domain::ports::EssayRepository;
use crate::services::EditorService;

const BANNER: &str = "Orbit essay editor backend running. Endpoints: /api/analyze, /api/rephrase, \
/api/grammar, /api/summarize, /api/transform, /api/essays, /api/history, /api/stats";

/// Configuration for the editor HTTP server.
#[derive(Debug, Clone)]
pub struct EditorHttpConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to enable CORS.
    pub enable_cors: bool,
    /// Default and maximum number of essays per history request.
    pub history_limit: usize,
}

impl Default for EditorHttpConfig {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for EditorHttpConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            enable_cors: config.enable_cors,
            history_limit: config.history_limit,
        }
    }
}

/// Body shared by the text operations.
///
/// `essay` is accepted as an alias for `text`; both may hold any JSON and are
/// coerced to a string before the engine sees them.
#[derive(Debug, Default, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub essay: Option<Value>,
}

impl TextRequest {
    pub fn input(&self) -> EssayInput {
        EssayInput::first_of(&[self.text.as_ref(), self.essay.as_ref()])
    }
}

/// Request to shift the tone of a text.
#[derive(Debug, Default, Deserialize)]
pub struct TransformRequest {
    #[serde(flatten)]
    pub body: TextRequest,
    #[serde(default)]
    pub tone: Option<Value>,
}

impl TransformRequest {
    /// Requested tone; non-string values never match a known tone.
    fn tone(&self) -> Option<&str> {
        self.tone.as_ref().map(|tone| tone.as_str().unwrap_or_default())
    }
}

/// Request to archive an essay.
#[derive(Debug, Default, Deserialize)]
pub struct SaveEssayRequest {
    #[serde(flatten)]
    pub body: TextRequest,
    #[serde(default)]
    pub result: Option<Value>,
}

/// Query parameters for history listings.
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RephraseResponse {
    pub rephrased: RephraseStyles,
}

#[derive(Debug, Serialize)]
pub struct SavedEssayResponse {
    pub id: i64,
}

/// An archived essay with its text shortened for listings.
#[derive(Debug, Serialize)]
pub struct EssayResponse {
    pub id: i64,
    pub text: String,
    pub result: Option<Value>,
    pub created_at: String,
}

impl From<EssayRecord> for EssayResponse {
    fn from(record: EssayRecord) -> Self {
        Self {
            id: record.id,
            text: record.preview(),
            created_at: record.created_at.to_rfc3339(),
            result: record.result,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<EssayResponse>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_body(status: StatusCode, error: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.to_string(),
        }),
    )
}

/// Map a domain error onto a status and envelope.
///
/// Backend failures are logged with their diagnostic and answered with a
/// generic body.
fn api_error(err: DomainError) -> ApiError {
    if !err.is_client_error() {
        tracing::error!(error = %err, "request failed");
        return error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "INTERNAL",
        );
    }

    match err {
        DomainError::EssayNotFound(id) => {
            error_body(StatusCode::NOT_FOUND, format!("Essay {id} not found"), "NOT_FOUND")
        }
        DomainError::InvalidInput(message) => {
            error_body(StatusCode::BAD_REQUEST, message, "INVALID_INPUT")
        }
        other => error_body(StatusCode::BAD_REQUEST, other.to_string(), "INVALID_INPUT"),
    }
}

fn invalid_json(detail: impl std::fmt::Display) -> ApiError {
    error_body(
        StatusCode::BAD_REQUEST,
        format!("Invalid JSON body: {detail}"),
        "INVALID_JSON",
    )
}

/// Decode a request body leniently.
///
/// A missing, blank or non-object body reads as `{}`, so every field falls
/// back to its default. Only unparseable JSON is rejected.
fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let value = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_slice::<Value>(bytes).map_err(invalid_json)? {
            object @ Value::Object(_) => object,
            _ => Value::Object(serde_json::Map::new()),
        }
    };

    serde_json::from_value(value).map_err(invalid_json)
}

/// JSON body extractor that ignores the content type and coerces empty
/// bodies instead of rejecting them.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| invalid_json(rejection.body_text()))?;
        parse_body(&bytes).map(JsonBody)
    }
}

/// Shared state for the editor HTTP server.
struct AppState<R: EssayRepository> {
    service: EditorService<R>,
    history_limit: usize,
}

/// Editor HTTP Server.
pub struct EditorHttpServer<R: EssayRepository + 'static> {
    config: EditorHttpConfig,
    service: EditorService<R>,
}

impl<R: EssayRepository + 'static> EditorHttpServer<R> {
    pub fn new(service: EditorService<R>, config: EditorHttpConfig) -> Self {
        Self { config, service }
    }

    /// Build the router.
    pub fn build_router(self) -> Router {
        let state = Arc::new(AppState {
            service: self.service,
            history_limit: self.config.history_limit.max(1),
        });

        let app = Router::new()
            .route("/", get(index))
            .route("/health", get(health_check))
            // Engine operations
            .route("/api/analyze", post(analyze::<R>))
            .route("/api/rephrase", post(rephrase::<R>))
            .route("/api/grammar", post(grammar::<R>))
            .route("/api/summarize", post(summarize::<R>))
            .route("/api/transform", post(transform::<R>))
            // Archive
            .route("/api/essays", post(save_essay::<R>))
            .route("/api/essays/{id}", get(get_essay::<R>))
            .route("/api/history", get(history::<R>))
            .route("/api/stats", get(stats::<R>))
            .with_state(state);

        if self.config.enable_cors {
            app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
                .layer(TraceLayer::new_for_http())
        } else {
            app.layer(TraceLayer::new_for_http())
        }
    }

    /// Start the server and run until `shutdown` resolves.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let host = self.config.host.clone();
        let port = self.config.port;
        let router = self.build_router();

        let listener = TcpListener::bind((host.as_str(), port)).await?;
        tracing::info!(addr = %listener.local_addr()?, "editor HTTP server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("editor HTTP server stopped");
        Ok(())
    }
}

// Handler functions

async fn index() -> &'static str {
    BANNER
}

async fn health_check() -> &'static str {
    "OK"
}

async fn analyze<R: EssayRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    JsonBody(req): JsonBody<TextRequest>,
) -> Json<AnalysisReport> {
    Json(state.service.analyze(&req.input()))
}

async fn rephrase<R: EssayRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    JsonBody(req): JsonBody<TextRequest>,
) -> Result<Json<RephraseResponse>, ApiError> {
    state
        .service
        .rephrase(&req.input())
        .map(|rephrased| Json(RephraseResponse { rephrased }))
        .map_err(api_error)
}

async fn grammar<R: EssayRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    JsonBody(req): JsonBody<TextRequest>,
) -> Result<Json<GrammarCorrection>, ApiError> {
    state
        .service
        .correct_grammar(&req.input())
        .map(Json)
        .map_err(api_error)
}

async fn summarize<R: EssayRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    JsonBody(req): JsonBody<TextRequest>,
) -> Json<Summary> {
    Json(state.service.summarize(&req.input()))
}

async fn transform<R: EssayRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    JsonBody(req): JsonBody<TransformRequest>,
) -> Result<Json<ToneTransform>, ApiError> {
    state
        .service
        .transform(&req.body.input(), req.tone())
        .map(Json)
        .map_err(api_error)
}

async fn save_essay<R: EssayRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    JsonBody(req): JsonBody<SaveEssayRequest>,
) -> Result<(StatusCode, Json<SavedEssayResponse>), ApiError> {
    let mut essay = NewEssay::new(req.body.input().into_string());
    essay.result = req.result;

    let id = state.service.save(essay).await.map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(SavedEssayResponse { id })))
}

async fn get_essay<R: EssayRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<i64>,
) -> Result<Json<EssayRecord>, ApiError> {
    match state.service.get(id).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(api_error(DomainError::EssayNotFound(id))),
        Err(e) => Err(api_error(e)),
    }
}

async fn history<R: EssayRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let limit = params
        .limit
        .unwrap_or(state.history_limit)
        .clamp(1, state.history_limit);

    let records = state.service.history(limit).await.map_err(api_error)?;
    Ok(Json(HistoryResponse {
        history: records.into_iter().map(EssayResponse::from).collect(),
    }))
}

async fn stats<R: EssayRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<EssayStats>, ApiError> {
    state.service.stats().await.map(Json).map_err(api_error)
}
