use std::sync::Arc;

use axum::{Extension, http::StatusCode, response::Json};
use serde_json::{Value, json};

use crate::{server::AppState, types::BookSuggestion, warning};

pub async fn voting(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<BookSuggestion>>, (StatusCode, Json<Value>)> {
    match state.suggestions.suggestions().await {
        Ok(suggestions) => Ok(Json(suggestions)),
        Err(e) => {
            warning!("Failed to read suggestions: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Failed to load suggestions" })),
            ))
        }
    }
}

/// Replaces the voting collection wholesale with the request body.
pub async fn save_voting(
    Extension(state): Extension<Arc<AppState>>,
    Json(suggestions): Json<Vec<BookSuggestion>>,
) -> (StatusCode, Json<Value>) {
    match state.suggestions.save(&suggestions).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Suggestions saved" })),
        ),
        Err(e) => {
            warning!("Failed to save suggestions: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Failed to save suggestions" })),
            )
        }
    }
}
