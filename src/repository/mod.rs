//! Repository layer for book records
//!
//! `BookStore` is the storage contract the service layer depends on. It
//! carries no validation: any record handed to it is stored as-is.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{error::AppResult, models::Book};

pub use memory::InMemoryBookStore;

/// Keyed storage for book records.
///
/// Implementations must be safe to share between threads and must read and
/// replace each record as a whole.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Every record currently held, in no particular order
    async fn get_all(&self) -> AppResult<Vec<Book>>;

    /// The record with this identifier, or `None`
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Book>>;

    /// Insert keyed by `book.id`. An identifier that is already present
    /// leaves the existing record untouched.
    async fn add(&self, book: Book) -> AppResult<()>;

    /// Write `book` at its identifier's slot, inserting if absent
    async fn update(&self, book: Book) -> AppResult<()>;

    /// Remove the record; `false` when nothing was stored under `id`
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
