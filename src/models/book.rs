//! Book record model and related types.
//!
//! A [`Book`] is only ever built from a [`BookPayload`] that passed
//! [`BookPayload::validate`], so a stored book always has a non-empty name and
//! never reads past its page count. `finished` is derived, never supplied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Operation a book request belongs to. Drives the user-facing wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Add,
    Fetch,
    Update,
    Delete,
}

impl BookAction {
    fn failure_prefix(self) -> &'static str {
        match self {
            BookAction::Add => "Gagal menambahkan buku",
            BookAction::Fetch => "Buku tidak ditemukan",
            BookAction::Update => "Gagal memperbarui buku",
            BookAction::Delete => "Buku gagal dihapus",
        }
    }

    /// Message returned with a successful response, if the operation has one
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            BookAction::Add => Some("Buku berhasil ditambahkan"),
            BookAction::Fetch => None,
            BookAction::Update => Some("Buku berhasil diperbarui"),
            BookAction::Delete => Some("Buku berhasil dihapus"),
        }
    }

    pub fn missing_name(self) -> AppError {
        AppError::Validation(format!("{}. Mohon isi nama buku", self.failure_prefix()))
    }

    pub fn read_page_overflow(self) -> AppError {
        AppError::Validation(format!(
            "{}. readPage tidak boleh lebih besar dari pageCount",
            self.failure_prefix()
        ))
    }

    pub fn not_found(self) -> AppError {
        match self {
            BookAction::Fetch => AppError::NotFound(self.failure_prefix().to_string()),
            _ => AppError::NotFound(format!("{}. Id tidak ditemukan", self.failure_prefix())),
        }
    }
}

/// `finished` is strict equality of the two optionals: a book with neither
/// count is finished, a book with only one of them is not.
pub fn is_finished(page_count: Option<i64>, read_page: Option<i64>) -> bool {
    page_count == read_page
}

/// Book fields supplied by the client on create and on full update
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    /// Book title (required, non-empty)
    pub name: Option<String>,
    pub year: Option<i64>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<i64>,
    /// Must not exceed `pageCount` when both are given
    pub read_page: Option<i64>,
    pub reading: Option<bool>,
}

impl BookPayload {
    /// Check the payload; the first failing rule wins.
    pub fn validate(&self, action: BookAction) -> AppResult<()> {
        if self.name.as_deref().map_or(true, str::is_empty) {
            return Err(action.missing_name());
        }

        if let (Some(read_page), Some(page_count)) = (self.read_page, self.page_count) {
            if read_page > page_count {
                return Err(action.read_page_overflow());
            }
        }

        Ok(())
    }
}

/// Full book record
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_page: Option<i64>,
    /// Derived: `pageCount == readPage`
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<bool>,
    #[serde(serialize_with = "iso8601_millis")]
    #[schema(value_type = String, format = DateTime)]
    pub inserted_at: DateTime<Utc>,
    #[serde(serialize_with = "iso8601_millis")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a new record from a validated payload
    pub fn new(id: String, payload: BookPayload, now: DateTime<Utc>) -> Self {
        let mut book = Self {
            id,
            name: String::new(),
            year: None,
            author: None,
            summary: None,
            publisher: None,
            page_count: None,
            read_page: None,
            finished: false,
            reading: None,
            inserted_at: now,
            updated_at: now,
        };
        book.overwrite(payload);
        book
    }

    /// Replace every mutable field from a validated payload.
    /// `id` and `inserted_at` are left untouched.
    pub fn apply(&mut self, payload: BookPayload, now: DateTime<Utc>) {
        self.overwrite(payload);
        self.updated_at = now;
    }

    fn overwrite(&mut self, payload: BookPayload) {
        self.name = payload.name.unwrap_or_default();
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.reading = payload.reading;
        self.finished = is_finished(self.page_count, self.read_page);
    }

    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Short book representation for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

/// `2024-05-01T10:20:30.123Z`
fn iso8601_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
}
