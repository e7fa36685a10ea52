//! UseCase layer: connect, change pixel, disconnect, read board.

mod change_pixel;
mod commit_order;
mod connect_client;
mod disconnect_client;
mod error;
mod get_board;

pub use change_pixel::{ChangePixelCommand, ChangePixelUseCase, PixelChangeOutcome};
pub use commit_order::CommitOrder;
pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::{ChangePixelError, ConnectError};
pub use get_board::{BoardOverview, GetBoardUseCase};
