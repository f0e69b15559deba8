//! Business logic services

pub mod auth;
pub mod books;
pub mod loans;
pub mod readers;

use crate::{audit::AuditLog, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: books::BooksService,
    pub readers: readers::ReadersService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services with the given repository and audit log
    pub fn new(repository: Repository, audit: AuditLog) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), audit.clone()),
            books: books::BooksService::new(repository.clone(), audit.clone()),
            readers: readers::ReadersService::new(repository.clone(), audit.clone()),
            loans: loans::LoansService::new(repository, audit),
        }
    }
}
