//! Conversion logic between domain events and wire DTOs.

use crate::domain::{BoardEvent, EditResult};
use crate::infrastructure::dto::websocket as dto;
use pixelboard_shared::time::timestamp_to_rfc3339;

impl From<&EditResult> for dto::PongMessage {
    fn from(result: &EditResult) -> Self {
        Self {
            r#type: dto::MessageType::Pong,
            success: result.accepted,
            message: result.message.clone(),
            date: timestamp_to_rfc3339(result.timestamp.value()),
        }
    }
}

/// Serialize a domain event into the JSON text frame sent to clients
pub fn encode_event(event: &BoardEvent) -> Result<String, serde_json::Error> {
    match event {
        BoardEvent::Init { cells } => serde_json::to_string(&dto::InitMessage {
            r#type: dto::MessageType::Init,
            board: cells.iter().map(|c| c.as_str().to_string()).collect(),
        }),
        BoardEvent::PixelChanged { index, color } => {
            serde_json::to_string(&dto::PixelChangeMessage {
                r#type: dto::MessageType::PixelChange,
                pixel_index: index.value() as i64,
                color: color.as_str().to_string(),
            })
        }
        BoardEvent::Pong(result) => serde_json::to_string(&dto::PongMessage::from(result)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Palette, PixelIndex, Timestamp};

    #[test]
    fn test_encode_init() {
        // テスト項目: Init イベントが {"type":"init","board":[...]} に変換される
        // given (前提条件):
        let fill = Palette::default().resolve("#fed734").unwrap();
        let event = BoardEvent::Init {
            cells: vec![fill.clone(), fill],
        };

        // when (操作):
        let json: serde_json::Value = serde_json::from_str(&encode_event(&event).unwrap()).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({"type": "init", "board": ["#fed734", "#fed734"]})
        );
    }

    #[test]
    fn test_encode_pixel_changed() {
        // テスト項目: PixelChanged イベントがクライアントのリクエストと同じ形になる
        // given (前提条件):
        let event = BoardEvent::PixelChanged {
            index: PixelIndex::checked(10, 625).unwrap(),
            color: Palette::default().resolve("#ff4500").unwrap(),
        };

        // when (操作):
        let json: serde_json::Value = serde_json::from_str(&encode_event(&event).unwrap()).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({"type": "pixel change", "pixelIndex": 10, "color": "#ff4500"})
        );
    }

    #[test]
    fn test_encode_pong() {
        // テスト項目: Pong イベントは success / message / date を持ち、date は RFC 3339
        // given (前提条件):
        let event = BoardEvent::Pong(EditResult::rejected(Timestamp::new(1672531200123)));

        // when (操作):
        let json: serde_json::Value = serde_json::from_str(&encode_event(&event).unwrap()).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "type": "pong",
                "success": false,
                "message": "rejected",
                "date": "2023-01-01T00:00:00.123Z"
            })
        );
    }
}
