//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{EditValidationError, MessagePushError};

/// 接続処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("failed to send initial board: {0}")]
    InitialPushFailed(#[from] MessagePushError),
}

/// ピクセル変更処理のエラー
///
/// どのエラーでもキャンバスとセッション記録は変更されていない（`PushFailed` を除く）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangePixelError {
    /// User-Agent が無い、または空白のみ
    #[error("client agent is missing")]
    MissingClientAgent,

    #[error("invalid edit: {0}")]
    InvalidEdit(#[from] EditValidationError),

    /// 反映後の通知に失敗（反映自体は完了している）
    #[error("failed to notify clients: {0}")]
    PushFailed(#[from] MessagePushError),
}
