use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    api, config, error,
    management::{BookStore, SuggestionStore},
};

/// Store handles shared with every request handler.
pub struct AppState {
    pub books: BookStore,
    pub suggestions: SuggestionStore,
}

pub async fn start_api_server(state: Arc<AppState>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/current", get(api::current))
        .route("/history", get(api::history))
        .route("/voting", get(api::voting))
        .route("/save-voting", post(api::save_voting))
        .layer(Extension(state));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
