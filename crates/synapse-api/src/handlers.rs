//! Route handler functions for all endpoints.
//!
//! Each handler extracts query/path parameters via axum extractors,
//! interacts with AppState services, and returns HTML or JSON responses.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use synapse_chat::{select_response, ChatEvent, SessionSnapshot};
use synapse_core::sample::{history_conversations, sidebar_conversations};
use synapse_core::time::{format_relative_time, TimeStyle};
use synapse_core::types::{ChatMessage, ConversationRecord, WindowFilter};
use synapse_history::{filter_conversations, HistoryViewState};
use synapse_ui::{
    render_chat_page, render_history_page, render_sidebar_list, render_transcript, LANDING_HTML,
};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Query parameter types
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ChatPageParams {
    /// Deep-linked conversation id. Highlighted in the sidebar only.
    pub id: Option<String>,
    /// Sidebar search text.
    pub q: Option<String>,
    /// `closed` renders the sidebar collapsed.
    pub sidebar: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConversationParams {
    pub q: Option<String>,
    pub filter: Option<String>,
}

impl ConversationParams {
    /// Build the history view state, rejecting unknown filter tags.
    fn view_state(&self) -> Result<HistoryViewState, ApiError> {
        let filter = match self.filter.as_deref().filter(|f| !f.trim().is_empty()) {
            Some(tag) => tag.parse::<WindowFilter>()?,
            None => WindowFilter::default(),
        };
        Ok(HistoryViewState::new(self.q.clone().unwrap_or_default(), filter))
    }
}

// =============================================================================
// Request / response types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RespondResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct SidebarQueryRequest {
    pub query: String,
    /// Conversation to keep highlighted in the re-rendered list.
    #[serde(default)]
    pub active: Option<String>,
}

/// A conversation record plus its history-style relative time.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationEntry {
    #[serde(flatten)]
    pub record: ConversationRecord,
    pub relative_time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationsResponse {
    pub query: String,
    pub filter: WindowFilter,
    pub summary: String,
    pub conversations: Vec<ConversationEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub active_sessions: usize,
}

// =============================================================================
// Page handlers
// =============================================================================

/// GET / - the static landing page.
pub async fn landing() -> impl IntoResponse {
    Html(LANDING_HTML)
}

/// GET /chat - start a fresh chat session and render the chat page.
pub async fn chat_page(
    State(state): State<AppState>,
    Query(params): Query<ChatPageParams>,
) -> Result<Html<String>, ApiError> {
    let mut snapshot = state.chat.create_session()?;
    let session_id = snapshot.id;

    if let Some(q) = params.q.filter(|q| !q.is_empty()) {
        snapshot = state
            .chat
            .apply_event(session_id, ChatEvent::SidebarQueryChanged(q))?;
    }
    if params.sidebar.as_deref() == Some("closed") {
        snapshot = state.chat.apply_event(session_id, ChatEvent::SidebarClosed)?;
    }
    if let Some(ref id) = params.id {
        tracing::debug!(session_id = %session_id, conversation_id = %id, "Chat opened from deep link");
    }

    let now = Local::now();
    let sidebar = sidebar_matches(&snapshot.sidebar_query, &now);

    Ok(Html(render_chat_page(
        &snapshot,
        &sidebar,
        params.id.as_deref(),
        &now,
    )))
}

/// Sidebar conversations matching `query`, over the whole time range.
fn sidebar_matches(query: &str, now: &DateTime<Local>) -> Vec<ConversationRecord> {
    filter_conversations(
        &sidebar_conversations(now.with_timezone(&Utc)),
        query,
        WindowFilter::All,
        now,
    )
}

/// GET /history - searchable, filterable conversation history.
pub async fn history_page(
    State(state): State<AppState>,
    Query(params): Query<ConversationParams>,
) -> Result<Html<String>, ApiError> {
    let view = params.view_state()?;
    let now = Local::now();
    let listing = view.listing(&history_conversations(now.with_timezone(&Utc)), &now);
    Ok(Html(render_history_page(
        &view,
        &listing,
        &now,
        state.config.history.tags_shown,
    )))
}

/// GET /health - health check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        active_sessions: state.chat.session_count(),
    })
}

// =============================================================================
// JSON handlers
// =============================================================================

/// POST /api/respond - canned reply for a single input, no session involved.
pub async fn respond(Json(req): Json<RespondRequest>) -> Json<RespondResponse> {
    Json(RespondResponse {
        reply: select_response(&req.input).to_string(),
    })
}

/// GET /api/conversations - filtered history records.
pub async fn conversations(
    Query(params): Query<ConversationParams>,
) -> Result<Json<ConversationsResponse>, ApiError> {
    let view = params.view_state()?;
    let now = Local::now();
    let listing = view.listing(&history_conversations(now.with_timezone(&Utc)), &now);
    let summary = listing.summary();

    let conversations = listing
        .results
        .into_iter()
        .map(|record| ConversationEntry {
            relative_time: format_relative_time(&record.timestamp, &now, TimeStyle::History),
            record,
        })
        .collect();

    Ok(Json(ConversationsResponse {
        query: view.query,
        filter: view.filter,
        summary,
        conversations,
    }))
}

/// POST /api/sessions - create a chat session.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ApiError> {
    let snapshot = state.chat.create_session()?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /api/sessions/{id} - session snapshot.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(state.chat.snapshot(id)?))
}

/// GET /api/sessions/{id}/transcript - transcript HTML fragment.
pub async fn transcript(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, ApiError> {
    let snapshot = state.chat.snapshot(id)?;
    Ok(Html(render_transcript(&snapshot, &Local::now())))
}

/// POST /api/sessions/{id}/messages - send a user message.
///
/// The reply arrives later; poll the session to see it.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<ChatMessage>), ApiError> {
    let message = state.chat.send_message(id, &req.content)?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// POST /api/sessions/{id}/reset - "New Chat".
pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(state.chat.new_chat(id)?))
}

/// POST /api/sessions/{id}/sidebar - toggle the sidebar.
pub async fn toggle_sidebar(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(state.chat.apply_event(id, ChatEvent::SidebarToggled)?))
}

/// POST /api/sessions/{id}/sidebar-query - search the sidebar.
///
/// Stores the query on the session and returns the re-rendered list; the
/// transcript is left alone.
pub async fn sidebar_query(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SidebarQueryRequest>,
) -> Result<Html<String>, ApiError> {
    let snapshot = state
        .chat
        .apply_event(id, ChatEvent::SidebarQueryChanged(req.query))?;
    let now = Local::now();
    let sidebar = sidebar_matches(&snapshot.sidebar_query, &now);
    tracing::debug!(session_id = %id, query = %snapshot.sidebar_query, matched = sidebar.len(), "Sidebar searched");
    Ok(Html(render_sidebar_list(&sidebar, req.active.as_deref(), &now)))
}
