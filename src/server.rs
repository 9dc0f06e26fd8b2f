use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, types::AuthFlow};

pub async fn start_api_server(state: Arc<Mutex<Option<AuthFlow>>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .route("/token", get(api::token).layer(Extension(state)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind callback server on {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Callback server failed: {}", e);
    }
}
