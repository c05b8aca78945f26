use std::sync::Arc;

use crate::{
    config, info,
    management::{BookStore, SuggestionStore},
    server::{AppState, start_api_server},
};

pub async fn serve() {
    let data_dir = config::data_dir();
    let state = Arc::new(AppState {
        books: BookStore::new(data_dir.clone()),
        suggestions: SuggestionStore::new(data_dir),
    });

    info!("Listening on {}", config::server_addr());
    start_api_server(state).await;
}
