//! Client metadata captured from the WebSocket handshake.

use std::net::SocketAddr;

use axum::http::{HeaderMap, header::USER_AGENT};

use crate::domain::OriginAddress;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Identity metadata of one connection, fixed at handshake time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientMeta {
    pub origin: OriginAddress,
    /// Raw `User-Agent`; validated per edit
    pub client_agent: Option<String>,
}

impl ClientMeta {
    pub fn from_handshake(headers: &HeaderMap, peer: SocketAddr) -> Self {
        Self {
            origin: resolve_origin(headers, peer),
            client_agent: resolve_client_agent(headers),
        }
    }
}

/// First entry of `X-Forwarded-For`, or the peer IP when the header is absent or its first entry is blank
pub fn resolve_origin(headers: &HeaderMap, peer: SocketAddr) -> OriginAddress {
    headers
        .get(X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(|first| OriginAddress::new(first.to_string()).ok())
        .unwrap_or_else(|| OriginAddress::from(peer.ip()))
}

/// `User-Agent` header as text; non-UTF-8 values count as absent
pub fn resolve_client_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
