//! WebSocket message DTOs.
//!
//! Every frame is a JSON object tagged with `type`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Init,
    #[serde(rename = "pixel change")]
    PixelChange,
    Pong,
}

/// Server → client, once on connect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitMessage {
    pub r#type: MessageType,
    pub board: Vec<String>,
}

/// Client → server edit request, and server → all broadcast of an accepted edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelChangeMessage {
    pub r#type: MessageType,
    pub pixel_index: i64,
    pub color: String,
}

/// Server → requester, result of an edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PongMessage {
    pub r#type: MessageType,
    pub success: bool,
    pub message: String,
    /// RFC 3339, UTC
    pub date: String,
}
