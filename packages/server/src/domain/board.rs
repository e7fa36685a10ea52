//! Board aggregate: canvas + palette + session tracker.
//!
//! `Board::apply_pixel_change` is the whole critical section of an edit
//! (validate → eligibility → mutate → record). Holding `&mut Board` for the
//! duration of the call is what makes it atomic.

use std::time::Duration;

use super::{
    canvas::Canvas,
    error::{BoardConfigError, PixelChangeError},
    palette::{Color, Palette},
    session::{DEFAULT_COOLDOWN, SessionTracker},
    validator::validate_edit,
    value_object::{ClientAgent, ConnectionId, OriginAddress, PixelIndex, Timestamp},
};

/// 25 x 25 grid
pub const DEFAULT_CELL_COUNT: usize = 625;

pub const DEFAULT_FILL_COLOR: &str = "#fed734";

/// Startup settings of a board
#[derive(Debug, Clone)]
pub struct BoardSettings {
    pub cell_count: usize,
    pub fill_color: String,
    pub palette: Palette,
    pub cooldown: Duration,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            cell_count: DEFAULT_CELL_COUNT,
            fill_color: DEFAULT_FILL_COLOR.to_string(),
            palette: Palette::default(),
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

/// Edit request with the identity metadata captured from the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelChangeRequest {
    pub connection_id: ConnectionId,
    pub origin: OriginAddress,
    pub agent: ClientAgent,
    pub pixel_index: i64,
    pub color: String,
}

/// An edit that has been written to the canvas and recorded in the session table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedPixelChange {
    pub index: PixelIndex,
    pub color: Color,
    pub applied_at: Timestamp,
}

/// The single source of truth for the shared canvas and its edit sessions
#[derive(Debug, Clone)]
pub struct Board {
    canvas: Canvas,
    palette: Palette,
    sessions: SessionTracker,
}

impl Board {
    pub fn new(settings: BoardSettings) -> Result<Self, BoardConfigError> {
        if settings.cell_count == 0 {
            return Err(BoardConfigError::EmptyCanvas);
        }

        let fill = settings
            .palette
            .resolve(&settings.fill_color)
            .ok_or_else(|| BoardConfigError::DefaultColorNotAllowed(settings.fill_color.clone()))?;

        Ok(Self {
            canvas: Canvas::new(settings.cell_count, fill),
            palette: settings.palette,
            sessions: SessionTracker::new(settings.cooldown),
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn sessions(&self) -> &SessionTracker {
        &self.sessions
    }

    pub fn snapshot(&self) -> Vec<Color> {
        self.canvas.snapshot()
    }

    /// Validate, check eligibility, paint and record, all or nothing.
    pub fn apply_pixel_change(
        &mut self,
        request: PixelChangeRequest,
        now: Timestamp,
    ) -> Result<AppliedPixelChange, PixelChangeError> {
        let edit = validate_edit(
            &self.palette,
            self.canvas.len(),
            request.pixel_index,
            &request.color,
        )?;

        self.sessions.check_eligibility(
            &request.connection_id,
            &request.origin,
            &request.agent,
            now,
        )?;

        self.canvas.set_cell(edit.index, edit.color.clone());
        self.sessions
            .record(request.connection_id, request.origin, request.agent, now);

        Ok(AppliedPixelChange {
            index: edit.index,
            color: edit.color,
            applied_at: now,
        })
    }

    /// Drop the session record of a disconnected connection.
    ///
    /// Returns `true` if a record existed.
    pub fn end_session(&mut self, connection_id: &ConnectionId) -> bool {
        self.sessions.remove(connection_id).is_some()
    }
}
