//! In-memory storage layer

pub mod books;

/// Main store struct holding the process-wide collections
#[derive(Clone)]
pub struct Store {
    pub books: books::BookStore,
}

impl Store {
    /// Create a store seeded with the startup catalog
    pub fn new() -> Self {
        Self {
            books: books::BookStore::with_seed_catalog(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
