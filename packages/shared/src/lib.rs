//! Utilities shared by the pixelboard packages: logging setup and time helpers.

pub mod logger;
pub mod time;
