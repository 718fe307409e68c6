//! API handlers for the bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use std::convert::Infallible;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    routing::{delete, get, post, put},
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Lenient JSON body. A missing body, or one not sent as JSON, reads as
/// `T::default()`; a JSON body that fails to decode is passed on as an error
/// for the handler to report after its own checks.
pub struct BookBody<T>(pub AppResult<T>);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase())
        .map_or(false, |mime| {
            let essence = mime.split(';').next().unwrap_or_default().trim();
            essence == "application/json" || essence.ends_with("+json")
        })
}

#[async_trait]
impl<S, T> FromRequest<S> for BookBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(req.headers());

        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => return Ok(BookBody(Err(AppError::BadRequest(rejection.body_text())))),
        };

        if !json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BookBody(Ok(T::default())));
        }

        Ok(BookBody(
            serde_json::from_slice(&bytes).map_err(|e| AppError::BadRequest(e.to_string())),
        ))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        .route("/books/:book_id", get(books::get_book))
        .route("/books/:book_id", put(books::update_book))
        .route("/books/:book_id", delete(books::delete_book))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
