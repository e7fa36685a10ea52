//! InMemory Board Repository 実装
//!
//! ドメイン層が定義する BoardRepository trait の具体的な実装。
//! `Board` 集約を 1 つの Mutex で保護し、全ての変更をその直列化ポイントに通します。
//! プロセス終了時に状態は失われます（永続化なし）。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    AppliedPixelChange, Board, BoardRepository, Color, ConnectionId, PixelChangeError,
    PixelChangeRequest, Timestamp,
};

/// インメモリ Board Repository 実装
pub struct InMemoryBoardRepository {
    /// Board ドメインモデル
    board: Arc<Mutex<Board>>,
}

impl InMemoryBoardRepository {
    /// 新しい InMemoryBoardRepository を作成
    pub fn new(board: Arc<Mutex<Board>>) -> Self {
        Self { board }
    }
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn snapshot(&self) -> Vec<Color> {
        let board = self.board.lock().await;
        board.snapshot()
    }

    async fn apply_pixel_change(
        &self,
        request: PixelChangeRequest,
        now: Timestamp,
    ) -> Result<AppliedPixelChange, PixelChangeError> {
        let mut board = self.board.lock().await;
        board.apply_pixel_change(request, now)
    }

    async fn remove_session(&self, connection_id: &ConnectionId) -> bool {
        let mut board = self.board.lock().await;
        board.end_session(connection_id)
    }

    async fn count_sessions(&self) -> usize {
        let board = self.board.lock().await;
        board.sessions().len()
    }
}
