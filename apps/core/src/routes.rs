//! HTTP API for the chat backend.
//!
//! # Routes
//!
//! - `GET  /health`                        — liveness probe
//! - `GET  /api/characters`                — catalog listing
//! - `POST /api/characters`                — create a character
//! - `GET  /api/characters/{id}/messages`  — conversation history
//! - `GET  /api/profiles`                  — generation profile metadata
//! - `POST /api/chat`                      — generate an in-character reply

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use validator::Validate;

use crate::config::AppConfig;
use crate::database;
use crate::engine::{self, ResponseProfile};
use crate::error::AppError;
use crate::models::{Character, ChatMessage, ChatRequest, ChatResponse, NewCharacter};
use crate::rate_limiter::RateLimiter;

/// Sweep the throttle map once it tracks this many conversations.
const THROTTLE_PRUNE_THRESHOLD: usize = 1024;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub limiter: Arc<Mutex<RateLimiter>>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &AppConfig) -> Self {
        Self {
            pool,
            limiter: Arc::new(Mutex::new(RateLimiter::new(
                config.chat_rate_limit,
                config.chat_rate_window,
            ))),
        }
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/characters", get(list_characters).post(create_character))
        .route("/api/characters/{id}/messages", get(character_messages))
        .route("/api/profiles", get(list_profiles))
        .route("/api/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "zchat-core",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/characters — stock catalog plus user-created characters.
async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<Character>>, AppError> {
    Ok(Json(database::list_characters(&state.pool).await?))
}

/// POST /api/characters — create a character; missing fields get catalog
/// defaults.
async fn create_character(
    State(state): State<AppState>,
    Json(payload): Json<NewCharacter>,
) -> Result<Json<Character>, AppError> {
    payload.validate()?;
    let character = database::create_character(&state.pool, payload).await?;
    info!(character = %character.name, id = %character.id, "character created");
    Ok(Json(character))
}

/// GET /api/characters/{id}/messages — conversation history, oldest first.
async fn character_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    database::get_character(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("character '{id}'")))?;
    Ok(Json(database::get_character_messages(&state.pool, &id).await?))
}

/// GET /api/profiles — display metadata for the generation profiles.
async fn list_profiles() -> Json<Vec<engine::ProfileInfo>> {
    Json(engine::profile_catalog())
}

/// POST /api/chat — classify the message, compose a reply, persist both
/// sides of the exchange.
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    request.validate()?;

    {
        let mut limiter = state
            .limiter
            .lock()
            .map_err(|_| AppError::Internal("rate limiter lock poisoned".to_string()))?;
        if limiter.tracked() > THROTTLE_PRUNE_THRESHOLD {
            limiter.prune();
        }
        if !limiter.check(&request.character_id) {
            return Err(AppError::RateLimited);
        }
    }

    let character = database::get_character(&state.pool, &request.character_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("character '{}'", request.character_id)))?;

    let profile = ResponseProfile::parse_lossy(request.profile.as_deref());
    let response = engine::generate_response(
        &mut rand::thread_rng(),
        &character.persona(),
        &request.message,
        profile,
    );

    database::add_message(&state.pool, &request.character_id, "user", &request.message).await?;
    database::add_message(&state.pool, &request.character_id, "assistant", &response).await?;

    Ok(Json(ChatResponse { response }))
}
