//! In-memory book store backed by a sharded concurrent map

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use super::BookStore;
use crate::{error::AppResult, models::Book};

/// Process-lifetime store. Clones share the same table.
#[derive(Clone, Default)]
pub struct InMemoryBookStore {
    books: Arc<DashMap<Uuid, Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn get_all(&self) -> AppResult<Vec<Book>> {
        // Each shard is read-locked only while it is walked, so this is a
        // per-record consistent view rather than a global snapshot.
        Ok(self.books.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        Ok(self.books.get(&id).map(|entry| entry.value().clone()))
    }

    async fn add(&self, book: Book) -> AppResult<()> {
        // Atomic insert-if-absent: the shard stays locked between the
        // lookup and the insert.
        self.books.entry(book.id).or_insert(book);
        Ok(())
    }

    async fn update(&self, book: Book) -> AppResult<()> {
        self.books.insert(book.id, book);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.books.remove(&id).is_some())
    }
}
