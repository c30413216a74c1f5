//! Axum route handlers for the wisdom-site HTTP server.
//!
//! # Routes
//!
//! - `GET  /health`                 — Returns `{"status": "ok", "version": ..., "service": "wisdom-site"}`
//! - `POST /form/field`             — Validate one field against the submitted form values
//! - `POST /form/validate`          — Validate a whole form
//! - `POST /form/phone-mask`        — Apply the live phone mask
//! - `POST /contact`                — Simulated contact submission
//! - `POST /chat`                   — Send a chat message in a session
//! - `GET  /chat/transcript`        — JSON transcript (`?session_id=`)
//! - `DELETE /chat/transcript`      — Discard a session (`?session_id=`)
//! - `GET  /chat/transcript.html`   — Escaped HTML transcript (`?session_id=`)
//! - `GET  /preferences`            — Current theme and accessibility mode
//! - `POST /preferences/theme`      — Toggle the theme
//! - `POST /preferences/accessibility` — Toggle accessibility mode

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use dashmap::DashMap;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::chat::{ChatSession, PendingReply, Responder, SendOutcome, TranscriptRenderer};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::form::{
    format_phone, phone_digits, ContactForm, FieldId, SimulatedTransport, SubmissionTransport,
    SubmitOutcome,
};
use crate::latency::simulate_latency;
use crate::prefs::{MemoryPreferenceStore, PreferenceStore, Preferences, SqlitePreferenceStore};

type ApiError = (StatusCode, Json<Value>);

/// A stored chat session and when it was last used.
pub struct ChatSlot {
    pub session: ChatSession,
    last_seen: Instant,
}

impl ChatSlot {
    fn new(latency: std::time::Duration) -> Self {
        Self {
            session: ChatSession::with_responder(Responder::new(), latency),
            last_seen: Instant::now(),
        }
    }

    pub fn last_seen(&self) -> Instant {
        self.last_seen
    }

    fn begin(&mut self, message: &str) -> Option<PendingReply> {
        self.last_seen = Instant::now();
        self.session.type_input(message);
        self.session.begin_send()
    }
}

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub prefs: Arc<dyn PreferenceStore>,
    /// Chat sessions keyed by session id, at most `config.max_chat_sessions`.
    pub sessions: Arc<DashMap<String, ChatSlot>>,
    pub transport: Arc<dyn SubmissionTransport>,
    pub renderer: Arc<TranscriptRenderer>,
    /// Cancelled on shutdown; aborts in-flight latency waits.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Build the state described by `config`, opening the preference store.
    pub fn new(config: SiteConfig) -> crate::error::Result<Self> {
        let prefs: Arc<dyn PreferenceStore> = if config.uses_in_memory_prefs() {
            Arc::new(SqlitePreferenceStore::in_memory()?)
        } else {
            Arc::new(SqlitePreferenceStore::open(&config.prefs_db)?)
        };
        let transport = match &config.submit_failure {
            Some(reason) => SimulatedTransport::failing(config.submit_latency, reason.clone()),
            None => SimulatedTransport::new(config.submit_latency),
        };
        Self::with_parts(config, prefs, Arc::new(transport))
    }

    pub fn with_parts(
        config: SiteConfig,
        prefs: Arc<dyn PreferenceStore>,
        transport: Arc<dyn SubmissionTransport>,
    ) -> crate::error::Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            prefs,
            sessions: Arc::new(DashMap::new()),
            transport,
            renderer: Arc::new(TranscriptRenderer::new()?),
            shutdown: CancellationToken::new(),
        })
    }

    /// Zero latency, process-local preferences.
    pub fn ephemeral() -> crate::error::Result<Self> {
        let config = SiteConfig {
            chat_latency: std::time::Duration::ZERO,
            submit_latency: std::time::Duration::ZERO,
            ..SiteConfig::default()
        };
        let transport = SimulatedTransport::new(config.submit_latency);
        Self::with_parts(
            config,
            Arc::new(MemoryPreferenceStore::new()),
            Arc::new(transport),
        )
    }

    /// Store a new session, first dropping the least recently active ones
    /// while the map is full.
    fn admit_session(&self, session_id: String, slot: ChatSlot) {
        while self.sessions.len() >= self.config.max_chat_sessions {
            let oldest = self
                .sessions
                .iter()
                .min_by_key(|entry| entry.value().last_seen)
                .map(|entry| entry.key().clone());
            let Some(oldest) = oldest else { break };
            self.sessions.remove(&oldest);
            tracing::debug!("Evicted idle chat session {}", oldest);
        }
        self.sessions.insert(session_id, slot);
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/form/field", post(field_handler))
        .route("/form/validate", post(validate_handler))
        .route("/form/phone-mask", post(phone_mask_handler))
        .route("/contact", post(contact_handler))
        .route("/chat", post(chat_handler))
        .route(
            "/chat/transcript",
            get(transcript_handler).delete(discard_session_handler),
        )
        .route("/chat/transcript.html", get(transcript_html_handler))
        .route("/preferences", get(preferences_handler))
        .route("/preferences/theme", post(toggle_theme_handler))
        .route(
            "/preferences/accessibility",
            post(toggle_accessibility_handler),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn error_body(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

fn site_error(e: SiteError) -> ApiError {
    let status = match &e {
        SiteError::MissingElement(_) | SiteError::UnknownField(_) => StatusCode::BAD_REQUEST,
        SiteError::InvalidPreference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SiteError::Submission(_) => StatusCode::BAD_GATEWAY,
        SiteError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
        SiteError::Store(_) | SiteError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::warn!("Request failed: {}", e);
    error_body(status, e.to_string())
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "wisdom-site",
    }))
}

fn default_show_errors() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldRequest {
    field: FieldId,
    value: String,
    /// Other form values; decides whether the phone is required.
    #[serde(default)]
    values: BTreeMap<FieldId, String>,
    #[serde(default = "default_show_errors")]
    show_errors: bool,
}

/// POST /form/field — validate a single field.
async fn field_handler(Json(request): Json<FieldRequest>) -> Json<Value> {
    let mut values = request.values;
    values.insert(request.field, request.value.clone());
    let mut form = ContactForm::from_values(values);

    let valid = form.validate_field(request.field, &request.value, request.show_errors);
    Json(json!({
        "field": request.field,
        "valid": valid,
        "presentation": form.presentation(request.field),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormRequest {
    values: BTreeMap<FieldId, String>,
    #[serde(default = "default_show_errors")]
    show_errors: bool,
}

/// POST /form/validate — validate every field of a form.
///
/// Fields absent from `values` are treated as missing page elements.
async fn validate_handler(Json(request): Json<FormRequest>) -> Json<Value> {
    let mut form = ContactForm::from_values(request.values);
    let valid = form.validate_form(request.show_errors);
    Json(json!({
        "valid": valid,
        "submitEnabled": form.submit_enabled,
        "fields": form.presentations(),
    }))
}

#[derive(Debug, Deserialize)]
struct PhoneMaskRequest {
    value: String,
}

/// POST /form/phone-mask
async fn phone_mask_handler(Json(request): Json<PhoneMaskRequest>) -> Json<Value> {
    Json(json!({
        "value": format_phone(&request.value),
        "digits": phone_digits(&request.value),
    }))
}

/// POST /contact — run the simulated submission.
///
/// 200 with the receipt, 422 with field presentations when the form is
/// invalid, 502 with the page alert when delivery fails.
async fn contact_handler(
    State(state): State<AppState>,
    Json(request): Json<FormRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut form = ContactForm::from_values(request.values);

    match form.submit(state.transport.as_ref(), &state.shutdown).await {
        Ok(SubmitOutcome::Submitted(receipt)) => Ok(Json(json!({
            "status": "submitted",
            "submission": receipt.submission,
            "submittedAt": receipt.submitted_at,
        }))),
        Ok(SubmitOutcome::Rejected) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "status": "rejected",
                "fields": form.presentations(),
            })),
        )),
        Err(e) => {
            let (status, _) = site_error(e);
            Err((
                status,
                Json(json!({
                    "status": "failed",
                    "alert": form.alert,
                    "submitEnabled": form.submit_enabled,
                })),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    session_id: Option<String>,
    message: String,
}

fn empty_message() -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Empty message", "invalid": true })),
    )
}

/// POST /chat — drive the stored [`ChatSession`] through one message.
///
/// The session is created when `session_id` is absent or unknown; a blank
/// message never creates one. The session map is only locked around the two
/// synchronous halves of the send, never across the reply wait.
async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<Value>, ApiError> {
    let session_id = request
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let existing = state
        .sessions
        .get_mut(&session_id)
        .map(|mut slot| slot.begin(&request.message));
    let pending = match existing {
        Some(pending) => pending,
        None => {
            let mut slot = ChatSlot::new(state.config.chat_latency);
            let pending = slot.begin(&request.message);
            if pending.is_some() {
                state.admit_session(session_id.clone(), slot);
            }
            pending
        }
    };
    let pending = pending.ok_or_else(empty_message)?;

    let waited = simulate_latency(state.config.chat_latency, &state.shutdown).await;

    let outcome = match state.sessions.get_mut(&session_id) {
        Some(mut slot) => {
            slot.last_seen = Instant::now();
            slot.session.finish_send(pending, waited)
        }
        None => return Err(unknown_session(&session_id)),
    };

    match outcome.map_err(site_error)? {
        SendOutcome::Replied { user, assistant } => Ok(Json(json!({
            "session_id": session_id,
            "user": user,
            "assistant": assistant,
        }))),
        SendOutcome::Rejected => Err(empty_message()),
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptQuery {
    session_id: String,
}

fn unknown_session(session_id: &str) -> ApiError {
    error_body(
        StatusCode::NOT_FOUND,
        format!("Session '{}' not found", session_id),
    )
}

fn session_messages(
    state: &AppState,
    session_id: &str,
) -> Result<Vec<crate::chat::ChatMessage>, ApiError> {
    state
        .sessions
        .get(session_id)
        .map(|slot| slot.session.transcript().messages().to_vec())
        .ok_or_else(|| unknown_session(session_id))
}

/// GET /chat/transcript?session_id=
async fn transcript_handler(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> Result<Json<Value>, ApiError> {
    let transcript = session_messages(&state, &query.session_id)?;

    Ok(Json(json!({
        "session_id": query.session_id,
        "messages": transcript,
    })))
}

/// GET /chat/transcript.html?session_id=
async fn transcript_html_handler(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> Result<Html<String>, ApiError> {
    let messages = session_messages(&state, &query.session_id)?;

    state
        .renderer
        .render_transcript(&messages)
        .map(Html)
        .map_err(site_error)
}

/// DELETE /chat/transcript?session_id= — the page was left or reloaded.
async fn discard_session_handler(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> Result<StatusCode, ApiError> {
    state
        .sessions
        .remove(&query.session_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| unknown_session(&query.session_id))
}

/// GET /preferences
async fn preferences_handler(State(state): State<AppState>) -> Result<Json<Preferences>, ApiError> {
    Preferences::load(state.prefs.as_ref())
        .map(Json)
        .map_err(site_error)
}

/// POST /preferences/theme
async fn toggle_theme_handler(
    State(state): State<AppState>,
) -> Result<Json<Preferences>, ApiError> {
    let store = state.prefs.as_ref();
    let mut prefs = Preferences::load(store).map_err(site_error)?;
    prefs.toggle_theme(store).map_err(site_error)?;
    Ok(Json(prefs))
}

/// POST /preferences/accessibility
async fn toggle_accessibility_handler(
    State(state): State<AppState>,
) -> Result<Json<Preferences>, ApiError> {
    let store = state.prefs.as_ref();
    let mut prefs = Preferences::load(store).map_err(site_error)?;
    prefs.toggle_accessibility(store).map_err(site_error)?;
    Ok(Json(prefs))
}
