//! Server state shared by all handlers.

use std::sync::Arc;

use crate::usecase::{
    ChangePixelUseCase, ConnectClientUseCase, DisconnectClientUseCase, GetBoardUseCase,
};

/// Shared application state
pub struct AppState {
    /// ConnectClientUseCase（クライアント接続のユースケース）
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    /// ChangePixelUseCase（ピクセル変更のユースケース）
    pub change_pixel_usecase: Arc<ChangePixelUseCase>,
    /// DisconnectClientUseCase（クライアント切断のユースケース）
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// GetBoardUseCase（ボード状態取得のユースケース）
    pub get_board_usecase: Arc<GetBoardUseCase>,
}
