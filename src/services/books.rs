//! Bookshelf service
//!
//! Plain function calls over the store: every method takes the request input
//! and returns either the response payload or an [`AppError`], so the whole
//! contract is testable without a running server.

use crate::{
    error::AppResult,
    models::book::{Book, BookAction, BookPayload, BookSummary},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book to the shelf, returning its new id
    pub fn add_book(&self, payload: BookPayload) -> AppResult<String> {
        let name = payload.name.clone().unwrap_or_default();
        self.repository
            .books
            .create(payload)
            .inspect(|id| tracing::info!("Book added: id={} name={:?}", id, name))
            .inspect_err(|e| tracing::debug!("Book rejected: {}", e))
    }

    /// Summaries of all books, oldest first
    pub fn list_books(&self) -> AppResult<Vec<BookSummary>> {
        self.repository.books.list()
    }

    pub fn count_books(&self) -> AppResult<usize> {
        self.repository.books.count()
    }

    /// Get a book by ID with full details
    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id)
    }

    /// Replace every editable field of a book.
    /// An unknown id is reported before any problem with the request body.
    pub fn update_book(&self, id: &str, payload: AppResult<BookPayload>) -> AppResult<()> {
        let books = &self.repository.books;
        let result = match payload {
            Ok(payload) => books.update_by_id(id, payload),
            Err(e) => books.ensure_exists(id, BookAction::Update).and(Err(e)),
        };

        result
            .inspect(|_| tracing::info!("Book updated: id={}", id))
            .inspect_err(|e| tracing::debug!("Book update rejected: id={} {}", id, e))
    }

    /// Remove a book from the shelf
    pub fn delete_book(&self, id: &str) -> AppResult<()> {
        self.repository
            .books
            .delete_by_id(id)
            .inspect(|_| tracing::info!("Book deleted: id={}", id))
            .inspect_err(|e| tracing::debug!("Book delete rejected: id={} {}", id, e))
    }
}
