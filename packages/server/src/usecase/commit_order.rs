//! 反映・ブロードキャスト・接続登録を直列化するための共有ロック

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// 編集の反映とブロードキャスト、新規接続の登録と init 送信を同じ順序に並べるロック
///
/// `ChangePixelUseCase` と `ConnectClientUseCase` で同じインスタンスを共有します。
#[derive(Debug, Clone, Default)]
pub struct CommitOrder(Arc<Mutex<()>>);

impl CommitOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.0.lock().await
    }
}
