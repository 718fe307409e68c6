//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    AppState,
};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` while the bookshelf can be read
    pub status: String,
    pub version: String,
    /// Books currently on the shelf
    pub books: usize,
}

/// Report liveness and the current shelf size
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Bookshelf is readable", body = HealthResponse),
        (status = 500, description = "Bookshelf lock poisoned", body = ErrorResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let books = state.services.books.count_books()?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books,
    }))
}
