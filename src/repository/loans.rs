//! Loans repository for database operations
//!
//! Loan creation and return each pair a loan write with a flip of the book's
//! availability flag. Both run inside one transaction so the flag and the
//! loan row can never diverge on a mid-sequence failure.

use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::loan::{ActiveLoan, Loan},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>(
            "SELECT id, reader_id, book_id, loan_date, return_date FROM loans WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Create a loan and mark the book borrowed, atomically.
    ///
    /// Fails without writing anything when the reader or book does not exist
    /// or the book is not available.
    pub async fn create(
        &self,
        reader_id: i64,
        book_id: i64,
        loan_date: NaiveDate,
    ) -> AppResult<i64> {
        let mut tx = self.pool.begin().await?;

        let reader_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM readers WHERE id = ?)")
                .bind(reader_id)
                .fetch_one(&mut *tx)
                .await?;
        if !reader_exists {
            return Err(AppError::NotFound(format!(
                "Reader with id {} not found",
                reader_id
            )));
        }

        let available: Option<bool> =
            sqlx::query_scalar("SELECT available FROM books WHERE id = ?")
                .bind(book_id)
                .fetch_optional(&mut *tx)
                .await?;
        match available {
            None => {
                return Err(AppError::NotFound(format!(
                    "Book with id {} not found",
                    book_id
                )))
            }
            Some(false) => {
                return Err(AppError::BusinessRule(
                    "The book is not available".to_string(),
                ))
            }
            Some(true) => {}
        }

        let loan_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO loans (reader_id, book_id, loan_date, return_date)
            VALUES (?, ?, ?, NULL)
            RETURNING id
            "#,
        )
        .bind(reader_id)
        .bind(book_id)
        .bind(loan_date)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE books SET available = 0 WHERE id = ?")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(loan_id)
    }

    /// Close a loan and mark the book available again, atomically.
    pub async fn return_loan(&self, loan_id: i64, return_date: NaiveDate) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let loan = sqlx::query_as::<_, Loan>(
            "SELECT id, reader_id, book_id, loan_date, return_date FROM loans WHERE id = ?",
        )
        .bind(loan_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", loan_id)))?;

        if loan.return_date.is_some() {
            return Err(AppError::BusinessRule(
                "The book was already returned".to_string(),
            ));
        }

        sqlx::query("UPDATE loans SET return_date = ? WHERE id = ?")
            .bind(return_date)
            .bind(loan_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE books SET available = 1 WHERE id = ?")
            .bind(loan.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// List active loans joined with reader name and book title
    pub async fn list_active(&self) -> AppResult<Vec<ActiveLoan>> {
        let loans = sqlx::query_as::<_, ActiveLoan>(
            r#"
            SELECT l.id, r.name AS reader_name, b.title AS book_title, l.loan_date
            FROM loans l
            JOIN readers r ON l.reader_id = r.id
            JOIN books b ON l.book_id = b.id
            WHERE l.return_date IS NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }
}
