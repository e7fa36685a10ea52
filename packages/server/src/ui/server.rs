//! Server execution logic.

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::{
    ChangePixelUseCase, ConnectClientUseCase, DisconnectClientUseCase, GetBoardUseCase,
};

use super::{
    handler::{
        http::{get_board, greeting, health_check},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Pixel canvas server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     connect_client_usecase,
///     change_pixel_usecase,
///     disconnect_client_usecase,
///     get_board_usecase,
/// );
/// server.run("0.0.0.0".to_string(), 3044).await?;
/// ```
pub struct Server {
    connect_client_usecase: Arc<ConnectClientUseCase>,
    change_pixel_usecase: Arc<ChangePixelUseCase>,
    disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    get_board_usecase: Arc<GetBoardUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        connect_client_usecase: Arc<ConnectClientUseCase>,
        change_pixel_usecase: Arc<ChangePixelUseCase>,
        disconnect_client_usecase: Arc<DisconnectClientUseCase>,
        get_board_usecase: Arc<GetBoardUseCase>,
    ) -> Self {
        Self {
            connect_client_usecase,
            change_pixel_usecase,
            disconnect_client_usecase,
            get_board_usecase,
        }
    }

    /// Build the Axum router with all endpoints
    pub fn into_router(self) -> Router {
        let app_state = Arc::new(AppState {
            connect_client_usecase: self.connect_client_usecase,
            change_pixel_usecase: self.change_pixel_usecase,
            disconnect_client_usecase: self.disconnect_client_usecase,
            get_board_usecase: self.get_board_usecase,
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/", get(greeting))
            .route("/api/health", get(health_check))
            .route("/api/board", get(get_board))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the server on `host:port` until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Pixelboard server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        // Peer addresses are needed to derive the origin of each client
        let app = self
            .into_router()
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
