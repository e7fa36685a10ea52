//! HTTP endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::BoardDto, ui::state::AppState};

/// Static greeting
pub async fn greeting() -> &'static str {
    "hello world"
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Debug endpoint to get the current board
pub async fn get_board(State(state): State<Arc<AppState>>) -> Json<BoardDto> {
    let overview = state.get_board_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(BoardDto {
        cell_count: overview.cells.len(),
        cells: overview.cells.into_iter().map(|c| c.into_string()).collect(),
        active_sessions: overview.active_sessions,
    })
}
