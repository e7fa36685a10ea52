//! Shared pixel canvas server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin pixelboard-server
//! cargo run --bin pixelboard-server -- --host 127.0.0.1 --port 3000 --cooldown-ms 1000
//! PORT=8080 cargo run --bin pixelboard-server
//! ```

use std::{collections::HashMap, sync::Arc, time::Duration};

use clap::Parser;
use pixelboard_server::{
    domain::{Board, BoardSettings},
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryBoardRepository},
    ui::Server,
    usecase::{
        ChangePixelUseCase, CommitOrder, ConnectClientUseCase, DisconnectClientUseCase,
        GetBoardUseCase,
    },
};
use pixelboard_shared::{logger::setup_logger, time::SystemClock};
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "pixelboard-server")]
#[command(about = "Shared real-time pixel canvas server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "3044")]
    port: u16,

    /// Minimum milliseconds between accepted edits of one connection (and of one origin)
    #[arg(long, env = "COOLDOWN_MS", default_value = "2500")]
    cooldown_ms: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. UseCases
    // 4. Server

    // 1. Create Repository (in-memory board)
    let settings = BoardSettings {
        cooldown: Duration::from_millis(args.cooldown_ms),
        ..BoardSettings::default()
    };
    let board = match Board::new(settings) {
        Ok(board) => board,
        Err(e) => {
            tracing::error!("Invalid board settings: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Board created with {} cells, cooldown {} ms",
        board.canvas().len(),
        args.cooldown_ms
    );
    let repository = Arc::new(InMemoryBoardRepository::new(Arc::new(Mutex::new(board))));

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    // 3. Create UseCases (connect and change pixel share one commit order)
    let commit_order = CommitOrder::new();
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        commit_order.clone(),
    ));
    let change_pixel_usecase = Arc::new(ChangePixelUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        Arc::new(SystemClock),
        commit_order,
    ));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let get_board_usecase = Arc::new(GetBoardUseCase::new(repository.clone()));

    // 4. Create and run the server
    let server = Server::new(
        connect_client_usecase,
        change_pixel_usecase,
        disconnect_client_usecase,
        get_board_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
