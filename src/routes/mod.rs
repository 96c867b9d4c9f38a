//! API routes
//!
//! Three routes: the chat page on `/`, a liveness probe on `/health`, and
//! the chat endpoint on `/chat`. The chat handler is a thin adapter: parse
//! the body, lowercase the message, delegate to the reply engine, wrap the
//! result. Every failure comes back to the client as JSON.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::reply::ReplyError;
use crate::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Errors surfaced to HTTP clients.
///
/// Malformed bodies are the client's fault (400); a failing reply engine is
/// ours (502). Either way the client gets a JSON body with an `error` field,
/// never a bare framework error page.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Reply engine failed: {0}")]
    Reply(#[from] ReplyError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Reply(_) => StatusCode::BAD_GATEWAY,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let message = request.message.to_lowercase();
    tracing::debug!(%message, "user message");

    let reply = state.replier.reply(&message)?;
    tracing::debug!(%reply, "bot reply");

    Ok(Json(ChatResponse { reply }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/chat", post(chat))
}
