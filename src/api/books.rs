use std::sync::Arc;

use axum::{Extension, http::StatusCode, response::Json};
use serde_json::{Value, json};

use crate::{
    management::BookStoreError,
    server::AppState,
    types::Book,
    warning,
};

pub async fn current(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Book>, (StatusCode, Json<Value>)> {
    match state.books.current().await {
        Ok(book) => Ok(Json(book)),
        Err(BookStoreError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "No current book" })),
        )),
        Err(e) => {
            warning!("Failed to read current book: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Failed to load current book" })),
            ))
        }
    }
}

pub async fn history(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Book>>, (StatusCode, Json<Value>)> {
    match state.books.history().await {
        Ok(books) => Ok(Json(books)),
        Err(e) => {
            warning!("Failed to read history: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Failed to load history" })),
            ))
        }
    }
}
