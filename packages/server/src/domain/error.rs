//! Domain errors.

use thiserror::Error;

/// Value object construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("origin address must not be empty")]
    EmptyOriginAddress,

    #[error("client agent must not be empty")]
    EmptyClientAgent,

    #[error("color must not be empty")]
    EmptyColor,

    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Shape errors of a proposed edit, detected before any session state is touched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditValidationError {
    #[error("color '{0}' is not in the palette")]
    ColorNotAllowed(String),

    #[error("pixel index {index} is out of range (cell count: {cell_count})")]
    IndexOutOfRange { index: i64, cell_count: usize },
}

/// Why the session policy refused an otherwise valid edit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Another identity from the same origin edited within the cooldown window
    #[error("another connection from the same origin edited recently")]
    OriginThrottled,

    /// Origin or client agent differs from the one recorded for this identity
    #[error("origin or client agent changed during the session")]
    IdentityMismatch,

    #[error("cooldown active, {remaining_millis} ms remaining")]
    CooldownActive { remaining_millis: i64 },
}

/// Failure of `Board::apply_pixel_change`; in both cases nothing was mutated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelChangeError {
    #[error("invalid edit: {0}")]
    Invalid(#[from] EditValidationError),

    #[error("edit rejected: {0}")]
    Rejected(#[from] RejectReason),
}

/// Inconsistent board settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardConfigError {
    #[error("canvas must have at least one cell")]
    EmptyCanvas,

    #[error("default color '{0}' is not in the palette")]
    DefaultColorNotAllowed(String),
}

/// Outbound message delivery errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' is not connected")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}
