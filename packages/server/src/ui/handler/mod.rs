//! Request handlers.

pub mod client_meta;
pub mod http;
pub mod websocket;
