//! HTTP thread: an axum server on its own tokio runtime.

pub mod routes;

use axum::Router;
use std::io;
use std::net::SocketAddr;
use std::thread::{self, JoinHandle};
use tokio::runtime::Runtime;

pub fn router() -> Router {
    Router::new().nest("/api", routes::router())
}

/// Spawns the server thread. Bind and serve errors are logged; the games keep running.
pub fn start_thread(bind_address: String) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("HTTP Thread".to_string())
        .spawn(move || {
            let runtime = match Runtime::new() {
                Ok(runtime) => runtime,
                Err(e) => {
                    log::error!("HTTP: Failed to create Tokio runtime: {}", e);
                    return;
                }
            };

            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::bind(&bind_address).await {
                    Ok(listener) => listener,
                    Err(e) => {
                        log::error!("HTTP: Failed to bind {}: {}", bind_address, e);
                        return;
                    }
                };
                log::info!("HTTP: Listening on {}", bind_address);

                let app = router().into_make_service_with_connect_info::<SocketAddr>();
                if let Err(e) = axum::serve(listener, app).await {
                    log::error!("HTTP: Server stopped: {}", e);
                }
            });
        })
}
