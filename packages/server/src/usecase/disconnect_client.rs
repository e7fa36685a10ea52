//! UseCase: クライアント切断処理
//!
//! セッション記録の削除は編集と同じ直列化ポイント（Repository）を通るため、
//! 処理中の編集と競合しません。

use std::sync::Arc;

use crate::domain::{BoardRepository, ConnectionId, MessagePusher};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn BoardRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(
        repository: Arc<dyn BoardRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// クライアント切断を実行
    ///
    /// # Returns
    ///
    /// セッション記録が存在して削除された場合は `true`
    pub async fn execute(&self, connection_id: &ConnectionId) -> bool {
        // 1. セッション記録を削除
        let had_session = self.repository.remove_session(connection_id).await;

        // 2. MessagePusher から登録解除
        self.message_pusher.unregister_client(connection_id).await;

        had_session
    }
}
