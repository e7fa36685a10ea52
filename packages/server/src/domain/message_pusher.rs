//! MessagePusher trait 定義
//!
//! クライアントへのイベント送信のインターフェース。
//! 具体的な実装（WebSocket など）は Infrastructure 層が提供します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{BoardEvent, ConnectionId, MessagePushError};

/// Outbound channel of one connection (serialized frames)
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続の送信チャンネルを登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続の送信チャンネルを登録解除
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 特定の接続にイベントを送信
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &BoardEvent,
    ) -> Result<(), MessagePushError>;

    /// 登録済みの全ての接続にイベントを送信（一部の送信失敗は許容）
    async fn broadcast(&self, event: &BoardEvent) -> Result<(), MessagePushError>;
}
