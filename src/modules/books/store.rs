//! In-memory catalog of books.

use anyhow::anyhow;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::BookError;
use super::filters::BookFilter;
use super::models::{Book, BookSummary};
use super::validator::BookDraft;
use crate::utils::{Clock, IdGenerator};

/// Fresh ids tried before giving up on a colliding generator.
const MAX_ID_ATTEMPTS: usize = 3;

/// Ordered collection of books, unique by id.
///
/// Each mutation runs under a single write lock so lookup and change are atomic.
/// A poisoned lock is recovered: every mutation is a single push, assignment or
/// removal, so the vector is never left half-updated.
pub struct BookStore {
    books: RwLock<Vec<Book>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl BookStore {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            books: RwLock::new(Vec::new()),
            ids,
            clock,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.books.read().unwrap_or_else(|poisoned| {
            tracing::warn!("book store lock was poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.books.write().unwrap_or_else(|poisoned| {
            tracing::warn!("book store lock was poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Append a new book with a fresh id and matching timestamps.
    pub fn insert(&self, draft: BookDraft) -> Result<Book, BookError> {
        let mut books = self.write();

        let id = (0..MAX_ID_ATTEMPTS)
            .map(|_| self.ids.generate())
            .find(|candidate| !books.iter().any(|book| &book.id == candidate))
            .ok_or_else(|| anyhow!("could not allocate a unique book id"))?;

        let now = self.clock.now();
        let book = Book::from_draft(id, draft, now, now);
        books.push(book.clone());

        if !books.iter().any(|stored| stored.id == book.id) {
            return Err(anyhow!("book '{}' is not visible after insert", book.id).into());
        }

        tracing::debug!(book_id = %book.id, total = books.len(), "book added");
        Ok(book)
    }

    /// Summaries of every book matching `filter`, in insertion order.
    pub fn list(&self, filter: &BookFilter) -> Vec<BookSummary> {
        self.read()
            .iter()
            .filter(|book| filter.matches(book))
            .map(Book::summary)
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<Book, BookError> {
        self.read()
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| BookError::NotFound(id.to_string()))
    }

    /// Replace every field of an existing book, keeping its id, position and `inserted_at`.
    pub fn replace(&self, id: &str, draft: BookDraft) -> Result<Book, BookError> {
        let mut books = self.write();

        let slot = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| BookError::NotFound(id.to_string()))?;

        let updated = Book::from_draft(id.to_string(), draft, slot.inserted_at, self.clock.now());
        *slot = updated.clone();

        tracing::debug!(book_id = %id, "book updated");
        Ok(updated)
    }

    pub fn remove(&self, id: &str) -> Result<Book, BookError> {
        let mut books = self.write();

        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| BookError::NotFound(id.to_string()))?;
        let removed = books.remove(index);

        tracing::debug!(book_id = %id, total = books.len(), "book deleted");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
