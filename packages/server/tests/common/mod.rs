//! Helpers for in-process server tests.

#![allow(dead_code)]

use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use pixelboard_server::{
    domain::{Board, BoardSettings},
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryBoardRepository},
    ui::Server,
    usecase::{
        ChangePixelUseCase, CommitOrder, ConnectClientUseCase, DisconnectClientUseCase,
        GetBoardUseCase,
    },
};
use pixelboard_shared::time::SystemClock;
use tokio::{
    net::{TcpListener, TcpStream},
    sync::Mutex,
    time::timeout,
};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{
        client::IntoClientRequest,
        http::{HeaderValue, header::USER_AGENT},
        protocol::Message,
    },
};

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub const BROWSER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64)";

/// Start a server with default board settings on an ephemeral port
pub async fn spawn_server() -> SocketAddr {
    let board = Board::new(BoardSettings::default()).expect("Failed to create Board");
    let repository = Arc::new(InMemoryBoardRepository::new(Arc::new(Mutex::new(board))));
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    let commit_order = CommitOrder::new();
    let server = Server::new(
        Arc::new(ConnectClientUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            commit_order.clone(),
        )),
        Arc::new(ChangePixelUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            Arc::new(SystemClock),
            commit_order,
        )),
        Arc::new(DisconnectClientUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        Arc::new(GetBoardUseCase::new(repository)),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local addr");
    tokio::spawn(server.serve(listener));
    addr
}

/// Connect to `/ws` with optional `User-Agent` and `X-Forwarded-For` headers
pub async fn connect(
    addr: SocketAddr,
    user_agent: Option<&str>,
    forwarded_for: Option<&str>,
) -> WsStream {
    let mut request = format!("ws://{addr}/ws")
        .into_client_request()
        .expect("Invalid request");
    if let Some(agent) = user_agent {
        request
            .headers_mut()
            .insert(USER_AGENT, HeaderValue::from_str(agent).unwrap());
    }
    if let Some(origin) = forwarded_for {
        request
            .headers_mut()
            .insert("x-forwarded-for", HeaderValue::from_str(origin).unwrap());
    }

    let (ws, _response) = connect_async(request).await.expect("Failed to connect");
    ws
}

/// Connect as a browser behind `origin` and consume the `init` message
pub async fn connect_browser(addr: SocketAddr, origin: &str) -> WsStream {
    let mut ws = connect(addr, Some(BROWSER_AGENT), Some(origin)).await;
    let init = recv_json(&mut ws).await;
    assert_eq!(init["type"], "init");
    ws
}

/// Next text frame as JSON (fails after 2 seconds)
pub async fn recv_json(ws: &mut WsStream) -> serde_json::Value {
    loop {
        let msg = timeout(Duration::from_secs(2), ws.next())
            .await
            .expect("Timed out waiting for message")
            .expect("Connection closed")
            .expect("WebSocket error");
        if let Message::Text(text) = msg {
            return serde_json::from_str(text.as_str()).expect("Invalid JSON");
        }
    }
}

/// Assert that no text frame arrives within 300 ms
pub async fn assert_no_message(ws: &mut WsStream) {
    let result = timeout(Duration::from_millis(300), async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Text(text))) => return Some(text.to_string()),
                Some(Ok(_)) => continue,
                _ => return None,
            }
        }
    })
    .await;
    if let Ok(Some(text)) = result {
        panic!("Unexpected message: {text}");
    }
}

pub async fn send_text(ws: &mut WsStream, text: &str) {
    ws.send(Message::Text(text.to_string().into()))
        .await
        .expect("Failed to send");
}

pub async fn send_pixel(ws: &mut WsStream, pixel_index: i64, color: &str) {
    let payload = serde_json::json!({
        "type": "pixel change",
        "pixelIndex": pixel_index,
        "color": color,
    });
    send_text(ws, &payload.to_string()).await;
}

pub async fn get_board(addr: SocketAddr) -> serde_json::Value {
    reqwest::get(format!("http://{addr}/api/board"))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON")
}
