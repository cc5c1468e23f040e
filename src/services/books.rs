//! Book catalogue service
//!
//! The only entry point that mutates the catalogue. Reads pass straight
//! through to the store; `add` and `update` are gated on the ISBN rule.

use std::sync::Arc;

use uuid::Uuid;

use crate::{error::AppResult, models::Book, repository::BookStore};

pub struct BookService<S: BookStore + ?Sized = dyn BookStore> {
    store: Arc<S>,
}

impl<S: BookStore + ?Sized> Clone for BookService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: BookStore + ?Sized> BookService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List every book in the catalogue
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        tracing::info!("Fetching all books");
        self.store.get_all().await
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        tracing::info!("Fetching book by ID: {}", id);
        self.store.get_by_id(id).await
    }

    /// Add a book. Returns `false` without touching the store when the ISBN
    /// is invalid.
    ///
    /// A record whose ID is already stored is reported as added even though
    /// the store keeps the existing record.
    pub async fn add(&self, book: Book) -> AppResult<bool> {
        if !book.has_valid_isbn() {
            tracing::warn!("Invalid ISBN: {}", book.isbn);
            return Ok(false);
        }

        let (title, isbn) = (book.title.clone(), book.isbn.clone());
        self.store.add(book).await?;
        tracing::info!("Added book: {}, ISBN: {}", title, isbn);
        Ok(true)
    }

    /// Replace a book (inserting it if its ID is unknown). Returns `false`
    /// without touching the store when the ISBN is invalid.
    pub async fn update(&self, book: Book) -> AppResult<bool> {
        if !book.has_valid_isbn() {
            tracing::warn!("Invalid ISBN: {}", book.isbn);
            return Ok(false);
        }

        let title = book.title.clone();
        self.store.update(book).await?;
        tracing::info!("Updated book: {}", title);
        Ok(true)
    }

    /// Delete a book. `false` when no book had this ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!("Deleted book with ID: {}", id);
        } else {
            tracing::warn!("Attempted to delete a book with ID {}, but it does not exist", id);
        }
        Ok(deleted)
    }
}
