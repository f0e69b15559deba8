//! Loan (borrow) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Loan model from database. `return_date IS NULL` means the loan is active.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Loan {
    pub id: i64,
    pub reader_id: i64,
    pub book_id: i64,
    pub loan_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// Active loan joined with reader and book for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActiveLoan {
    pub id: i64,
    pub reader_name: String,
    pub book_title: String,
    pub loan_date: NaiveDate,
}
