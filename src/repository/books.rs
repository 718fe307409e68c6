//! In-memory bookshelf store.
//!
//! Books live in one insertion-ordered map behind a single mutex. Every
//! operation takes the lock once and validates before it mutates, so the five
//! operations are serialized and none of them can half-apply.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use indexmap::IndexMap;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookAction, BookPayload, BookSummary},
};

type Shelf = IndexMap<String, Book>;

#[derive(Clone, Default)]
pub struct BooksRepository {
    shelf: Arc<Mutex<Shelf>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn shelf(&self) -> AppResult<MutexGuard<'_, Shelf>> {
        self.shelf
            .lock()
            .map_err(|_| AppError::Internal("bookshelf lock poisoned".to_string()))
    }

    /// Fresh id, unique among live books
    fn next_id(shelf: &Shelf) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if !shelf.contains_key(&id) {
                return id;
            }
        }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Summaries of every book, in insertion order
    pub fn list(&self) -> AppResult<Vec<BookSummary>> {
        Ok(self.shelf()?.values().map(Book::summary).collect())
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.shelf()?
            .get(id)
            .cloned()
            .ok_or_else(|| BookAction::Fetch.not_found())
    }

    /// Not-found error worded for `action` when `id` is not on the shelf
    pub fn ensure_exists(&self, id: &str, action: BookAction) -> AppResult<()> {
        if self.shelf()?.contains_key(id) {
            Ok(())
        } else {
            Err(action.not_found())
        }
    }

    pub fn count(&self) -> AppResult<usize> {
        Ok(self.shelf()?.len())
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Validate and append a new book. Returns the generated id.
    pub fn create(&self, payload: BookPayload) -> AppResult<String> {
        payload.validate(BookAction::Add)?;

        let mut shelf = self.shelf()?;
        let id = Self::next_id(&shelf);
        let book = Book::new(id.clone(), payload, Utc::now());
        shelf.insert(id.clone(), book);
        Ok(id)
    }

    /// Overwrite every mutable field of an existing book.
    /// An unknown id is reported before any payload problem.
    pub fn update_by_id(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        let mut shelf = self.shelf()?;
        let book = shelf
            .get_mut(id)
            .ok_or_else(|| BookAction::Update.not_found())?;

        payload.validate(BookAction::Update)?;
        book.apply(payload, Utc::now());
        Ok(())
    }

    pub fn delete_by_id(&self, id: &str) -> AppResult<()> {
        self.shelf()?
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| BookAction::Delete.not_found())
    }
}
