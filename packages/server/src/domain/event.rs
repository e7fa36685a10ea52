//! Events pushed from the server to clients.

use super::{
    palette::Color,
    value_object::{PixelIndex, Timestamp},
};

pub const APPLIED_MESSAGE: &str = "applied";
pub const REJECTED_MESSAGE: &str = "rejected";

/// Outcome of an edit, reported to the requesting connection only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    pub accepted: bool,
    pub message: String,
    pub timestamp: Timestamp,
}

impl EditResult {
    pub fn applied(timestamp: Timestamp) -> Self {
        Self {
            accepted: true,
            message: APPLIED_MESSAGE.to_string(),
            timestamp,
        }
    }

    pub fn rejected(timestamp: Timestamp) -> Self {
        Self {
            accepted: false,
            message: REJECTED_MESSAGE.to_string(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// Full canvas, sent once right after connect
    Init { cells: Vec<Color> },
    /// An accepted edit, sent to every connection
    PixelChanged { index: PixelIndex, color: Color },
    /// Edit result for the requester
    Pong(EditResult),
}
