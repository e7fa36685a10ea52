//! UseCase: ピクセル変更処理
//!
//! ## 処理の流れ
//!
//! 1. User-Agent の検証（無ければ黙って破棄）
//! 2. Repository で「検証 → 適格性チェック → 反映 → 記録」を一括実行
//! 3. 受理: 全接続（送信者を含む）へ `pixel change` をブロードキャストし、送信者に `pong(success)`
//! 4. 拒否: 送信者にだけ `pong(failure)`
//! 5. 不正な編集（色・範囲外）: 何も送らない
//!
//! 反映とブロードキャストは `commit_order` ロックの中で行うため、
//! ブロードキャストの順序は反映の順序と一致します。

use std::sync::Arc;

use pixelboard_shared::time::Clock;

use crate::domain::{
    AppliedPixelChange, BoardEvent, BoardRepository, ClientAgent, ConnectionId, EditResult,
    MessagePusher, OriginAddress, PixelChangeError, PixelChangeRequest, RejectReason, Timestamp,
};

use super::{commit_order::CommitOrder, error::ChangePixelError};

/// ピクセル変更リクエスト（トランスポート層から取り出した情報を含む）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePixelCommand {
    pub connection_id: ConnectionId,
    pub origin: OriginAddress,
    /// ハンドシェイク時の User-Agent（未加工）
    pub client_agent: Option<String>,
    pub pixel_index: i64,
    pub color: String,
}

/// ピクセル変更の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelChangeOutcome {
    Applied(AppliedPixelChange),
    Rejected(RejectReason),
}

/// ピクセル変更のユースケース
pub struct ChangePixelUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn BoardRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
    /// 反映とブロードキャストの順序を揃えるためのロック（接続処理と共有）
    commit_order: CommitOrder,
}

impl ChangePixelUseCase {
    /// 新しい ChangePixelUseCase を作成
    pub fn new(
        repository: Arc<dyn BoardRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
        commit_order: CommitOrder,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
            commit_order,
        }
    }

    /// ピクセル変更を実行
    ///
    /// # Returns
    ///
    /// * `Ok(PixelChangeOutcome::Applied)` - 反映済み、全接続に通知済み
    /// * `Ok(PixelChangeOutcome::Rejected)` - ポリシーにより拒否、送信者に通知済み
    /// * `Err(ChangePixelError)` - 入力不正（黙って破棄すべきもの）または通知失敗
    pub async fn execute(
        &self,
        command: ChangePixelCommand,
    ) -> Result<PixelChangeOutcome, ChangePixelError> {
        // 1. User-Agent の検証
        let agent = command
            .client_agent
            .and_then(|raw| ClientAgent::new(raw).ok())
            .ok_or(ChangePixelError::MissingClientAgent)?;

        let connection_id = command.connection_id;
        let request = PixelChangeRequest {
            connection_id,
            origin: command.origin,
            agent,
            pixel_index: command.pixel_index,
            color: command.color,
        };

        // 2. 反映 + ブロードキャスト（反映順を保つ）
        let (result, now) = {
            let _order = self.commit_order.lock().await;
            let now = Timestamp::new(self.clock.now_millis());
            let result = self.repository.apply_pixel_change(request, now).await;

            if let Ok(applied) = &result {
                self.message_pusher
                    .broadcast(&BoardEvent::PixelChanged {
                        index: applied.index,
                        color: applied.color.clone(),
                    })
                    .await?;
            }

            (result, now)
        };

        // 3. 送信者への結果通知
        match result {
            Ok(applied) => {
                tracing::info!(
                    "Connection '{}' painted pixel {} with {}",
                    connection_id,
                    applied.index.value(),
                    applied.color
                );
                self.message_pusher
                    .push_to(
                        &connection_id,
                        &BoardEvent::Pong(EditResult::applied(applied.applied_at)),
                    )
                    .await?;
                Ok(PixelChangeOutcome::Applied(applied))
            }
            Err(PixelChangeError::Rejected(reason)) => {
                tracing::info!(
                    "Connection '{}' is not allowed to paint: {}",
                    connection_id,
                    reason
                );
                self.message_pusher
                    .push_to(&connection_id, &BoardEvent::Pong(EditResult::rejected(now)))
                    .await?;
                Ok(PixelChangeOutcome::Rejected(reason))
            }
            Err(PixelChangeError::Invalid(e)) => Err(ChangePixelError::InvalidEdit(e)),
        }
    }
}
