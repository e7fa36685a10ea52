//! Shared real-time pixel canvas server.
//!
//! Clients connect over WebSocket, receive the whole canvas, and submit pixel
//! changes that are validated, rate limited per connection and per origin,
//! applied to the shared board and broadcast to every connected client.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
