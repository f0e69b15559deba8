//! Reader registry service

use validator::Validate;

use crate::{
    audit::AuditLog,
    error::AppResult,
    models::{
        reader::{CreateReader, Reader},
        session::Session,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ReadersService {
    repository: Repository,
    audit: AuditLog,
}

impl ReadersService {
    pub fn new(repository: Repository, audit: AuditLog) -> Self {
        Self { repository, audit }
    }

    /// Register a new reader. Validation failures abort before any write.
    pub async fn register(&self, session: &Session, reader: CreateReader) -> AppResult<Reader> {
        reader.validate()?;

        let created = self.repository.readers.create(&reader).await?;
        self.audit.record(
            Some(&session.username),
            &format!("Reader registered: {}", created.name),
        );

        Ok(created)
    }

    /// List all readers
    pub async fn list(&self) -> AppResult<Vec<Reader>> {
        self.repository.readers.list().await
    }

    /// Search readers by name, case-insensitive substring match
    pub async fn search(&self, term: &str) -> AppResult<Vec<Reader>> {
        self.repository.readers.search(term).await
    }
}
