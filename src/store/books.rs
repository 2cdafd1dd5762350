//! Book inventory store.
//!
//! The inventory is an ordered, insertion-order collection behind a single
//! mutex. Records are small and few, so every operation is a linear scan;
//! each one performs its whole read-modify-write under one guard, which
//! serializes concurrent updates to the same id.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// The sole source of truth for book records. Cloning shares the
/// underlying collection.
#[derive(Clone)]
pub struct BookStore {
    books: Arc<Mutex<Vec<Book>>>,
}

impl BookStore {
    /// Create a store holding the given initial records
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(Mutex::new(books)),
        }
    }

    /// Create a store seeded with the startup catalog
    pub fn with_seed_catalog() -> Self {
        Self::new(seed_catalog())
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Book>> {
        // A panicked holder cannot leave a record half-updated: every
        // mutation is a single field assignment on one element.
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the full inventory in insertion order
    pub fn list(&self) -> Vec<Book> {
        self.guard().clone()
    }

    /// Get the first record whose id matches, scanning in insertion order
    pub fn get(&self, id: &str) -> AppResult<Book> {
        let books = self.guard();
        let idx = position(&books, id)?;
        Ok(books[idx].clone())
    }

    /// Append a record unconditionally to the end of the inventory.
    /// No uniqueness check on `id`; lookups keep resolving to the first
    /// match in insertion order.
    pub fn append(&self, book: Book) -> Book {
        let mut books = self.guard();
        books.push(book);
        books[books.len() - 1].clone()
    }

    /// Lend one copy out: decrement the quantity of the matching record.
    /// The record keeps its position; nothing is replaced or reordered.
    pub fn checkout(&self, id: &str) -> AppResult<Book> {
        let mut books = self.guard();
        let idx = position(&books, id)?;
        if books[idx].quantity <= 0 {
            return Err(AppError::Unavailable);
        }
        books[idx].quantity -= 1;
        Ok(books[idx].clone())
    }

    /// Take one copy back: increment the quantity of the matching record.
    /// There is no upper bound; returns always succeed for a known id.
    pub fn return_copy(&self, id: &str) -> AppResult<Book> {
        let mut books = self.guard();
        let idx = position(&books, id)?;
        books[idx].quantity += 1;
        Ok(books[idx].clone())
    }
}

/// Index of the first record with the given id
fn position(books: &[Book], id: &str) -> AppResult<usize> {
    books
        .iter()
        .position(|b| b.id == id)
        .ok_or(AppError::NotFound)
}

/// Catalog loaded at startup. Reinitialized on every run; nothing persists.
fn seed_catalog() -> Vec<Book> {
    vec![
        Book {
            id: "1".to_string(),
            title: "In Search of Lost Time".to_string(),
            author: "Marcel Proust".to_string(),
            quantity: 2,
        },
        Book {
            id: "2".to_string(),
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            quantity: 5,
        },
        Book {
            id: "3".to_string(),
            title: "War and Peace".to_string(),
            author: "Lev Tolstoy".to_string(),
            quantity: 6,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str, quantity: i64) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: "Test Author".to_string(),
            quantity,
        }
    }

    #[test]
    fn test_seed_catalog_contents() {
        let store = BookStore::with_seed_catalog();
        let books = store.list();

        assert_eq!(books.len(), 3);
        assert_eq!(books[0].id, "1");
        assert_eq!(books[0].quantity, 2);
        assert_eq!(books[1].title, "The Great Gatsby");
        assert_eq!(books[2].author, "Lev Tolstoy");
    }

    #[test]
    fn test_get_returns_matching_record() {
        let store = BookStore::with_seed_catalog();

        let found = store.get("2").expect("seeded id must resolve");
        assert_eq!(found.id, "2");
        assert_eq!(found.title, "The Great Gatsby");
    }

    #[test]
    fn test_get_unknown_id() {
        let store = BookStore::with_seed_catalog();

        assert!(matches!(store.get("999"), Err(AppError::NotFound)));
    }

    #[test]
    fn test_append_lands_at_end_and_is_retrievable() {
        let store = BookStore::with_seed_catalog();

        let created = store.append(book("4", "New Arrival", 1));
        assert_eq!(created.id, "4");

        let books = store.list();
        assert_eq!(books.len(), 4);
        assert_eq!(books.last().map(|b| b.id.as_str()), Some("4"));
        assert!(store.get("4").is_ok());
    }

    #[test]
    fn test_append_does_not_validate() {
        let store = BookStore::new(Vec::new());

        // Neither id uniqueness nor quantity sign is enforced on append.
        store.append(book("x", "First", -3));
        store.append(book("x", "Second", 0));

        assert_eq!(store.list().len(), 2);
        assert_eq!(store.get("x").unwrap().quantity, -3);
    }

    #[test]
    fn test_checkout_decrements_until_exhausted() {
        let store = BookStore::with_seed_catalog();

        assert_eq!(store.checkout("1").unwrap().quantity, 1);
        assert_eq!(store.checkout("1").unwrap().quantity, 0);

        // Exhausted: the guard fires and the quantity stays put.
        assert!(matches!(store.checkout("1"), Err(AppError::Unavailable)));
        assert_eq!(store.get("1").unwrap().quantity, 0);
    }

    #[test]
    fn test_checkout_unknown_id() {
        let store = BookStore::with_seed_catalog();

        assert!(matches!(store.checkout("999"), Err(AppError::NotFound)));
    }

    #[test]
    fn test_return_increments_without_ceiling() {
        let store = BookStore::with_seed_catalog();

        assert_eq!(store.return_copy("3").unwrap().quantity, 7);
        assert_eq!(store.return_copy("3").unwrap().quantity, 8);
    }

    #[test]
    fn test_return_unknown_id() {
        let store = BookStore::with_seed_catalog();

        assert!(matches!(store.return_copy("999"), Err(AppError::NotFound)));
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let store = BookStore::new(Vec::new());
        store.append(book("1", "First Edition", 1));
        store.append(book("1", "Shadowed", 5));

        assert_eq!(store.get("1").unwrap().title, "First Edition");

        // Mutation addresses the first record too; the later one is untouched.
        let updated = store.checkout("1").expect("first copy is available");
        assert_eq!(updated.title, "First Edition");
        assert_eq!(updated.quantity, 0);
        assert_eq!(store.list()[1].quantity, 5);
    }

    #[test]
    fn test_mutation_preserves_order_and_identity() {
        let store = BookStore::with_seed_catalog();

        store.checkout("2").expect("seeded id must resolve");
        store.return_copy("1").expect("seeded id must resolve");

        let ids: Vec<String> = store.list().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_concurrent_checkouts_never_lose_updates() {
        let store = BookStore::new(vec![book("1", "Contended", 100)]);

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        store.checkout("1").expect("stock cannot run out here");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("checkout thread panicked");
        }

        assert_eq!(store.get("1").unwrap().quantity, 0);
    }
}
