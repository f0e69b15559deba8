//! Loan ledger service

use chrono::Utc;

use crate::{
    audit::AuditLog,
    error::AppResult,
    models::{loan::ActiveLoan, session::Session},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    audit: AuditLog,
}

impl LoansService {
    pub fn new(repository: Repository, audit: AuditLog) -> Self {
        Self { repository, audit }
    }

    /// Record a loan of a book to a reader, dated today.
    pub async fn create_loan(
        &self,
        session: &Session,
        reader_id: i64,
        book_id: i64,
    ) -> AppResult<i64> {
        let today = Utc::now().date_naive();
        let loan_id = self
            .repository
            .loans
            .create(reader_id, book_id, today)
            .await?;

        self.audit.record(
            Some(&session.username),
            &format!("Loan registered: reader {} - book {}", reader_id, book_id),
        );

        Ok(loan_id)
    }

    /// Close a loan, dated today.
    pub async fn return_loan(&self, session: &Session, loan_id: i64) -> AppResult<()> {
        let today = Utc::now().date_naive();
        self.repository.loans.return_loan(loan_id, today).await?;

        self.audit.record(
            Some(&session.username),
            &format!("Return registered: loan {}", loan_id),
        );

        Ok(())
    }

    /// List active loans with reader and book details
    pub async fn list_active(&self) -> AppResult<Vec<ActiveLoan>> {
        self.repository.loans.list_active().await
    }
}
