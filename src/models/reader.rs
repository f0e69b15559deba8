//! Reader (library patron) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Reader model from database. Readers are immutable once registered.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reader {
    pub id: i64,
    pub name: String,
    /// Free-text category (student, teacher, ...)
    pub category: String,
}

/// Create reader request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReader {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: String,
}
