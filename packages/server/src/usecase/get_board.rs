//! UseCase: ボード状態の取得（デバッグ用 HTTP エンドポイント向け）

use std::sync::Arc;

use crate::domain::{BoardRepository, Color};

/// Read-only view of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOverview {
    pub cells: Vec<Color>,
    pub active_sessions: usize,
}

/// ボード状態取得のユースケース
pub struct GetBoardUseCase {
    repository: Arc<dyn BoardRepository>,
}

impl GetBoardUseCase {
    pub fn new(repository: Arc<dyn BoardRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> BoardOverview {
        BoardOverview {
            cells: self.repository.snapshot().await,
            active_sessions: self.repository.count_sessions().await,
        }
    }
}
