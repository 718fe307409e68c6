//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    models::book::{Book, BookAction, BookPayload, BookSummary},
    AppState,
};

use super::BookBody;

const SUCCESS: &str = "success";

fn success_message(action: BookAction) -> String {
    action.success_message().unwrap_or_default().to_string()
}

/// Id of a freshly created book
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    pub book_id: String,
}

/// Response to a successful create
#[derive(Serialize, ToSchema)]
pub struct BookCreatedResponse {
    #[schema(example = "success")]
    pub status: String,
    pub message: String,
    pub data: BookIdData,
}

#[derive(Serialize, ToSchema)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}

/// All books, summarized
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    #[schema(example = "success")]
    pub status: String,
    pub data: BookListData,
}

#[derive(Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

/// One book with every field
#[derive(Serialize, ToSchema)]
pub struct BookDetailResponse {
    #[schema(example = "success")]
    pub status: String,
    pub data: BookData,
}

/// Status and message only, for update and delete
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "success")]
    pub status: String,
    pub message: String,
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book added", body = BookCreatedResponse),
        (status = 400, description = "Missing name, or readPage over pageCount", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    BookBody(payload): BookBody<BookPayload>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    let book_id = state.services.books.add_book(payload?)?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            status: SUCCESS.to_string(),
            message: success_message(BookAction::Add),
            data: BookIdData { book_id },
        }),
    ))
}

/// List every book as `{id, name, publisher}`
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Books in insertion order", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BookListResponse>> {
    let books = state.services.books.list_books()?;

    Ok(Json(BookListResponse {
        status: SUCCESS.to_string(),
        data: BookListData { books },
    }))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetailResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookDetailResponse>> {
    let book = state.services.books.get_book(&book_id)?;

    Ok(Json(BookDetailResponse {
        status: SUCCESS.to_string(),
        data: BookData { book },
    }))
}

/// Replace every field of a book
#[utoipa::path(
    put,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing name, or readPage over pageCount", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    BookBody(payload): BookBody<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update_book(&book_id, payload)?;

    Ok(Json(MessageResponse {
        status: SUCCESS.to_string(),
        message: success_message(BookAction::Update),
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete_book(&book_id)?;

    Ok(Json(MessageResponse {
        status: SUCCESS.to_string(),
        message: success_message(BookAction::Delete),
    }))
}
