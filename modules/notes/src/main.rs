//! Notes Service: standalone binary serving an in-memory notes CRUD API.
//!
//! Notes live only for the lifetime of the process.
//! Default: http://127.0.0.1:8080/

mod config;
mod error;
mod routes;
mod store;

use config::Config;
use routes::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new());
    let app = routes::router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        log::error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    log::info!("Notes Service listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(|e| {
        log::error!("Server error: {}", e);
        e
    })
}
