//! Catalog service - book CRUD rules

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create_book(&self, payload: BookPayload) -> AppResult<Book> {
        let fields = payload.into_fields()?;
        let book = self.repository.books.create(fields).await;
        let total = self.repository.books.count().await;
        tracing::info!(book_id = book.id, total, "Book created");
        Ok(book)
    }

    /// Update a book. An unknown id wins over a bad payload.
    pub async fn update_book(&self, id: i64, payload: AppResult<BookPayload>) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await?;

        let fields = payload?.into_fields()?;
        let book = self.repository.books.update(id, fields).await?;
        tracing::info!(book_id = id, "Book updated");
        Ok(book)
    }

    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}
