//! UseCase: クライアント接続処理
//!
//! 接続 ID を発行し、送信チャンネルを登録したうえで、現在のキャンバスを
//! その接続にだけ `init` として送信します。
//!
//! 登録・スナップショット取得・`init` 送信は `CommitOrder` ロックの中で行います。
//! 編集の反映とブロードキャストも同じロックの中で行われるため、確定した編集は
//! スナップショットに含まれるか、`init` の後にブロードキャストで届くかのどちらかです。

use std::sync::Arc;

use crate::domain::{
    BoardEvent, BoardRepository, ConnectionId, ConnectionIdFactory, MessagePusher, PusherChannel,
};

use super::{commit_order::CommitOrder, error::ConnectError};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn BoardRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 編集の反映・ブロードキャストと共有するロック
    commit_order: CommitOrder,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(
        repository: Arc<dyn BoardRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        commit_order: CommitOrder,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            commit_order,
        }
    }

    /// クライアント接続を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - クライアントへのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(ConnectionId)` - 発行された接続 ID
    /// * `Err(ConnectError)` - 初期キャンバスの送信に失敗（登録は取り消される）
    pub async fn execute(&self, sender: PusherChannel) -> Result<ConnectionId, ConnectError> {
        let connection_id = ConnectionIdFactory::generate();

        // 処理中の編集が終わるまで待ち、init より先に pixel change が届かないようにする
        let _order = self.commit_order.lock().await;

        // 1. MessagePusher に接続を登録
        self.message_pusher
            .register_client(connection_id, sender)
            .await;

        // 2. 現在のキャンバスをこの接続にだけ送信
        let cells = self.repository.snapshot().await;
        if let Err(e) = self
            .message_pusher
            .push_to(&connection_id, &BoardEvent::Init { cells })
            .await
        {
            self.message_pusher.unregister_client(&connection_id).await;
            return Err(e.into());
        }

        Ok(connection_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            AppliedPixelChange, Board, BoardSettings, Color, MessagePushError, MockMessagePusher,
            OriginAddress, PixelChangeError, PixelChangeRequest, Timestamp,
        },
        infrastructure::{
            message_pusher::WebSocketMessagePusher, repository::InMemoryBoardRepository,
        },
        usecase::{ChangePixelCommand, ChangePixelUseCase},
    };
    use async_trait::async_trait;
    use pixelboard_shared::time::FixedClock;
    use std::{collections::HashMap, time::Duration};
    use tokio::sync::{Mutex, Notify, mpsc};

    fn create_test_repository() -> Arc<InMemoryBoardRepository> {
        let board = Board::new(BoardSettings::default()).unwrap();
        Arc::new(InMemoryBoardRepository::new(Arc::new(Mutex::new(board))))
    }

    fn create_test_message_pusher() -> Arc<WebSocketMessagePusher> {
        Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(HashMap::new()))))
    }

    #[tokio::test]
    async fn test_connect_sends_init_to_new_client_only() {
        // テスト項目: 新規接続には init が送られ、既存の接続には何も送られない
        // given (前提条件):
        let message_pusher = create_test_message_pusher();
        let usecase = ConnectClientUseCase::new(
            create_test_repository(),
            message_pusher,
            CommitOrder::new(),
        );
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        usecase.execute(tx1).await.unwrap();
        let _init1 = rx1.recv().await.unwrap();

        // when (操作):
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        let result = usecase.execute(tx2).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let init: serde_json::Value = serde_json::from_str(&rx2.recv().await.unwrap()).unwrap();
        assert_eq!(init["type"], "init");
        assert_eq!(init["board"].as_array().unwrap().len(), 625);
        assert_eq!(init["board"][0], "#fed734");
        assert!(rx1.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_connect_assigns_unique_ids() {
        // テスト項目: 接続ごとに異なる接続 ID が発行される
        // given (前提条件):
        let usecase = ConnectClientUseCase::new(
            create_test_repository(),
            create_test_message_pusher(),
            CommitOrder::new(),
        );
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();

        // when (操作):
        let id1 = usecase.execute(tx1).await.unwrap();
        let id2 = usecase.execute(tx2).await.unwrap();

        // then (期待する結果):
        assert_ne!(id1, id2);
    }

    #[tokio::test]
    async fn test_connect_unregisters_when_init_push_fails() {
        // テスト項目: init の送信に失敗した場合はエラーを返し、登録を取り消す
        // given (前提条件):
        let mut message_pusher = MockMessagePusher::new();
        message_pusher
            .expect_register_client()
            .times(1)
            .returning(|_, _| ());
        message_pusher
            .expect_push_to()
            .times(1)
            .returning(|_, _| Err(MessagePushError::PushFailed("closed".to_string())));
        message_pusher
            .expect_unregister_client()
            .times(1)
            .returning(|_| ());
        let usecase = ConnectClientUseCase::new(
            create_test_repository(),
            Arc::new(message_pusher),
            CommitOrder::new(),
        );
        let (tx, _rx) = mpsc::unbounded_channel();

        // when (操作):
        let result = usecase.execute(tx).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ConnectError::InitialPushFailed(MessagePushError::PushFailed(
                "closed".to_string()
            )))
        );
    }

    /// snapshot() の途中で止まり、合図があるまで戻らない Repository
    struct PausedSnapshotRepository {
        inner: Arc<InMemoryBoardRepository>,
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl BoardRepository for PausedSnapshotRepository {
        async fn snapshot(&self) -> Vec<Color> {
            self.entered.notify_one();
            self.release.notified().await;
            self.inner.snapshot().await
        }

        async fn apply_pixel_change(
            &self,
            request: PixelChangeRequest,
            now: Timestamp,
        ) -> Result<AppliedPixelChange, PixelChangeError> {
            self.inner.apply_pixel_change(request, now).await
        }

        async fn remove_session(&self, connection_id: &ConnectionId) -> bool {
            self.inner.remove_session(connection_id).await
        }

        async fn count_sessions(&self) -> usize {
            self.inner.count_sessions().await
        }
    }

    #[tokio::test]
    async fn test_init_is_first_frame_when_edit_races_connect() {
        // テスト項目: 接続処理中に確定した編集があっても、新規接続が最初に受け取るのは init
        // given (前提条件):
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let repository = Arc::new(PausedSnapshotRepository {
            inner: create_test_repository(),
            entered: entered.clone(),
            release: release.clone(),
        });
        let message_pusher = create_test_message_pusher();
        let commit_order = CommitOrder::new();
        let connect = ConnectClientUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            commit_order.clone(),
        );
        let change = Arc::new(ChangePixelUseCase::new(
            repository,
            message_pusher.clone(),
            Arc::new(FixedClock::new(1_700_000_000_000)),
            commit_order,
        ));
        let editor = ConnectionIdFactory::generate();
        let (editor_tx, _editor_rx) = mpsc::unbounded_channel();
        message_pusher.register_client(editor, editor_tx).await;

        // when (操作): スナップショット取得中に別の接続が編集する
        let (tx, mut rx) = mpsc::unbounded_channel();
        let connecting = tokio::spawn(async move { connect.execute(tx).await });
        entered.notified().await;
        let editing = tokio::spawn(async move {
            change
                .execute(ChangePixelCommand {
                    connection_id: editor,
                    origin: OriginAddress::new("10.0.0.9".to_string()).unwrap(),
                    client_agent: Some("Mozilla/5.0".to_string()),
                    pixel_index: 7,
                    color: "#ff4500".to_string(),
                })
                .await
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        release.notify_one();
        connecting.await.unwrap().unwrap();
        editing.await.unwrap().unwrap();

        // then (期待する結果):
        let first: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(first["type"], "init");
        assert_eq!(first["board"][7], "#fed734");
        let second: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(second["type"], "pixel change");
        assert_eq!(second["pixelIndex"], 7);
    }
}
