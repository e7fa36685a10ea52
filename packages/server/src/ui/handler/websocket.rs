//! WebSocket connection handlers.
//!
//! One task per connection: inbound frames are handled one at a time, and the
//! connection is only cleaned up after the last in-flight edit finished.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{
        ConnectInfo, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::HeaderMap,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionId,
    infrastructure::dto::websocket::{MessageType, PixelChangeMessage},
    ui::state::AppState,
    usecase::{ChangePixelCommand, ChangePixelError},
};

use super::client_meta::ClientMeta;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let meta = ClientMeta::from_handshake(&headers, peer);
    ws.on_upgrade(move |socket| handle_socket(socket, state, meta))
}

/// Spawns a task that forwards messages from the rx channel to the WebSocket sender.
///
/// Ends when the channel closes or the client can no longer be written to.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, meta: ClientMeta) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive messages
    let (tx, rx) = mpsc::unbounded_channel();

    // Registers the channel and queues the initial board
    let connection_id = match state.connect_client_usecase.execute(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to set up connection from {}: {}", meta.origin, e);
            return;
        }
    };
    tracing::info!(
        "Connection '{}' established from {}",
        connection_id,
        meta.origin
    );

    let mut send_task = pusher_loop(rx, sender);

    loop {
        // Only waiting for the next frame is cancelled, never an edit in progress
        let msg = tokio::select! {
            msg = receiver.next() => msg,
            _ = &mut send_task => {
                tracing::debug!("Outbound stream of '{}' closed", connection_id);
                break;
            }
        };

        let msg = match msg {
            Some(Ok(msg)) => msg,
            Some(Err(e)) => {
                tracing::error!("WebSocket error on '{}': {}", connection_id, e);
                break;
            }
            None => break,
        };

        match msg {
            Message::Text(text) => {
                handle_text(&state, connection_id, &meta, text.as_str()).await;
            }
            Message::Ping(_) => {
                tracing::debug!("Received ping");
                // Ping/pong is handled automatically by the WebSocket protocol
            }
            Message::Close(_) => {
                tracing::info!("Connection '{}' requested close", connection_id);
                break;
            }
            _ => {}
        }
    }

    send_task.abort();

    let had_session = state
        .disconnect_client_usecase
        .execute(&connection_id)
        .await;
    tracing::info!(
        "Connection '{}' disconnected (session record removed: {})",
        connection_id,
        had_session
    );
}

/// Parse and dispatch one text frame; malformed frames are dropped
async fn handle_text(state: &AppState, connection_id: ConnectionId, meta: &ClientMeta, text: &str) {
    let request = match serde_json::from_str::<PixelChangeMessage>(text) {
        Ok(msg) if msg.r#type == MessageType::PixelChange => msg,
        Ok(msg) => {
            tracing::warn!(
                "Ignoring '{:?}' message from '{}'",
                msg.r#type,
                connection_id
            );
            return;
        }
        Err(e) => {
            tracing::warn!("Failed to parse message from '{}': {}", connection_id, e);
            return;
        }
    };

    let command = ChangePixelCommand {
        connection_id,
        origin: meta.origin.clone(),
        client_agent: meta.client_agent.clone(),
        pixel_index: request.pixel_index,
        color: request.color,
    };

    // Accepted and rejected edits are logged by the use case
    match state.change_pixel_usecase.execute(command).await {
        Ok(_) => {}
        Err(ChangePixelError::PushFailed(e)) => {
            tracing::warn!("Failed to notify after edit from '{}': {}", connection_id, e);
        }
        Err(e) => {
            tracing::debug!("Dropped edit from '{}': {}", connection_id, e);
        }
    }
}
