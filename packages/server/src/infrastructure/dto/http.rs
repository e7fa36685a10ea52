//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// `GET /api/board`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    pub cell_count: usize,
    pub cells: Vec<String>,
    pub active_sessions: usize,
}
