//! Domain layer: canvas, palette, session policy and the board aggregate.
//!
//! Nothing here knows about WebSocket, JSON or locks. The board aggregate
//! performs a whole edit through a single `&mut self` call, so whoever owns it
//! behind a lock gets an atomic validate / check / mutate / record step.

pub mod board;
pub mod canvas;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod palette;
pub mod repository;
pub mod session;
pub mod validator;
pub mod value_object;

pub use board::{AppliedPixelChange, Board, BoardSettings, PixelChangeRequest};
pub use canvas::Canvas;
pub use error::{
    BoardConfigError, EditValidationError, MessagePushError, PixelChangeError, RejectReason,
    ValueObjectError,
};
pub use event::{BoardEvent, EditResult};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use palette::{Color, Palette};
pub use repository::BoardRepository;
pub use session::{SessionRecord, SessionTracker};
pub use validator::{ValidatedEdit, validate_edit};
pub use value_object::{ClientAgent, ConnectionId, ConnectionIdFactory, OriginAddress, PixelIndex, Timestamp};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
