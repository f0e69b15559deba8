//! Book registry service

use validator::Validate;

use crate::{
    audit::AuditLog,
    error::AppResult,
    models::{
        book::{Book, CreateBook},
        session::Session,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    audit: AuditLog,
}

impl BooksService {
    pub fn new(repository: Repository, audit: AuditLog) -> Self {
        Self { repository, audit }
    }

    /// Register a new book. Validation failures abort before any write.
    pub async fn register(&self, session: &Session, book: CreateBook) -> AppResult<Book> {
        book.validate()?;

        let created = self.repository.books.create(&book).await?;
        self.audit.record(
            Some(&session.username),
            &format!("Book registered: {}", created.title),
        );

        Ok(created)
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Search books by title or author, case-insensitive substring match.
    /// No match is an empty list, not an error.
    pub async fn search(&self, term: &str) -> AppResult<Vec<Book>> {
        self.repository.books.search(term).await
    }
}
