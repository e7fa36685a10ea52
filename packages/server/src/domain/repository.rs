//! Repository trait 定義
//!
//! ドメイン層が必要とするボード状態へのアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{
    AppliedPixelChange, Color, ConnectionId, PixelChangeError, PixelChangeRequest, Timestamp,
};

/// Board Repository trait
///
/// 実装は 1 つの直列化ポイント（ロックなど）を通して全ての変更を行うこと。
/// `apply_pixel_change` と `remove_session` は同じ直列化ポイントを通る必要がある。
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// キャンバス全体のコピーを取得
    async fn snapshot(&self) -> Vec<Color>;

    /// 編集を検証・適格性チェック・反映・記録まで一括で行う
    async fn apply_pixel_change(
        &self,
        request: PixelChangeRequest,
        now: Timestamp,
    ) -> Result<AppliedPixelChange, PixelChangeError>;

    /// 切断した接続のセッション記録を削除（存在した場合は true）
    async fn remove_session(&self, connection_id: &ConnectionId) -> bool;

    /// セッション記録の件数を取得
    async fn count_sessions(&self) -> usize;
}
