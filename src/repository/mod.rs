//! Repository layer for book storage

pub mod books;

use crate::models::book::Book;

/// Main repository struct holding the stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository holding the given records
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::new(books),
        }
    }
}
