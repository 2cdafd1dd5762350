//! Inventory management service

use crate::{error::AppResult, models::book::Book, store::Store};

#[derive(Clone)]
pub struct InventoryService {
    store: Store,
}

impl InventoryService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Get the full catalog in insertion order
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.store.books.list())
    }

    /// Look up a single record by id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.store.books.get(id)
    }

    /// Register a new record in the catalog
    pub async fn create_book(&self, book: Book) -> AppResult<Book> {
        let created = self.store.books.append(book);
        tracing::info!("Registered book id={} ({})", created.id, created.title);
        Ok(created)
    }

    /// Lend one copy of a book out
    pub async fn checkout_book(&self, id: &str) -> AppResult<Book> {
        self.store.books.checkout(id)
    }

    /// Take one copy of a book back
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        self.store.books.return_copy(id)
    }
}
