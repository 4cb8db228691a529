//! HTTP route handlers.

use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tokio::sync::RwLock;
use tower_http::services::ServeDir;

use crate::domain::{Coordinate, SearchRadius};
use crate::ocm::DEFAULT_MAX_RESULTS;
use crate::session::{Session, SessionId, run_chat, run_search, SearchQuery};

use super::dto::*;
use super::state::AppState;
use super::templates::{IndexTemplate, StationListTemplate, StationView};

/// Number of station cards rendered on the HTML fragment.
const CARD_LIMIT: usize = 5;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/session", post(create_session))
        .route("/api/stations/search", get(search_stations))
        .route("/api/chat", post(chat))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Chat page with the location form.
async fn index_page() -> IndexTemplate {
    IndexTemplate
}

/// Create a fresh session.
async fn create_session(State(state): State<AppState>) -> Json<SessionCreatedResponse> {
    let id = state.sessions.create().await;
    Json(SessionCreatedResponse {
        session: id.to_string(),
    })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Look up a session from its wire-format id.
async fn lookup_session(
    state: &AppState,
    raw: &str,
) -> Result<Arc<RwLock<Session>>, AppError> {
    let id = SessionId::parse(raw).ok_or_else(|| AppError::BadRequest {
        message: format!("Invalid session id: {raw}"),
    })?;

    state.sessions.get(&id).await.ok_or_else(|| AppError::NotFound {
        message: "Unknown or expired session".to_string(),
    })
}

/// Search for charging stations near a location.
async fn search_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<StationSearchRequest>,
) -> Result<Response, AppError> {
    let session = lookup_session(&state, &req.session).await?;

    let origin =
        Coordinate::new(req.latitude(), req.longitude()).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    // The radius is clamped to the slider bounds before construction, so
    // this cannot fail on user input.
    let radius = SearchRadius::from_km(req.radius_km()).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let query = SearchQuery {
        origin,
        radius,
        max_results: DEFAULT_MAX_RESULTS,
    };

    let mut guard = session.write().await;
    let outcome = run_search(&mut guard, &state.ocm, &query).await;
    drop(guard);

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let stations: Vec<StationView> = outcome
            .recommendations
            .iter()
            .take(CARD_LIMIT)
            .enumerate()
            .map(|(i, item)| StationView::from_scored(i + 1, item))
            .collect();

        let template = StationListTemplate {
            notice: outcome.notice,
            stations,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;

        Ok(Html(html).into_response())
    } else {
        let stations: Vec<StationResult> = outcome
            .recommendations
            .iter()
            .map(StationResult::from_scored)
            .collect();

        Ok(Json(StationSearchResponse {
            notice: outcome.notice,
            stations,
        })
        .into_response())
    }
}

/// Send a chat message.
async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let session = lookup_session(&state, &req.session).await?;

    let mut guard = session.write().await;
    let reply = run_chat(&mut guard, &state.assistant, &req.message).await;
    let transcript = guard
        .transcript
        .iter()
        .map(MessageResult::from_message)
        .collect();
    drop(guard);

    Ok(Json(ChatResponse {
        reply: MessageResult::from_message(&reply),
        transcript,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
