//! In-memory book store

use std::sync::Arc;

use serde_json::json;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields},
};

/// Records loaded at startup
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: json!("Python Basics"),
            author: json!("John Doe"),
            year: json!(2021),
        },
        Book {
            id: 2,
            title: json!("Flask Guide"),
            author: json!("Jane Smith"),
            year: json!(2022),
        },
    ]
}

/// Ordered sequence of live books, in insertion order
#[derive(Clone)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// List all books
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Get book by ID (first match in sequence order)
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(AppError::BookNotFound(id))
    }

    /// Append a book. The id is the last record's id + 1, or 1 when empty,
    /// so the id of a deleted last record is handed out again.
    pub async fn create(&self, fields: BookFields) -> Book {
        let mut books = self.books.write().await;
        let id = books.last().map_or(1, |last| last.id + 1);
        let book = Book::new(id, fields);
        books.push(book.clone());
        book
    }

    /// Overwrite title, author and year in place
    pub async fn update(&self, id: i64, fields: BookFields) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(AppError::BookNotFound(id))?;
        book.apply(fields);
        Ok(book.clone())
    }

    /// Remove a book
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or(AppError::BookNotFound(id))?;
        books.remove(index);
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }
}
