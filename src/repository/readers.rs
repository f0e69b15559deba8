//! Readers repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::reader::{CreateReader, Reader},
};

#[derive(Clone)]
pub struct ReadersRepository {
    pool: Pool<Sqlite>,
}

impl ReadersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get reader by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>("SELECT id, name, category FROM readers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reader with id {} not found", id)))
    }

    /// Insert a new reader
    pub async fn create(&self, reader: &CreateReader) -> AppResult<Reader> {
        let created = sqlx::query_as::<_, Reader>(
            r#"
            INSERT INTO readers (name, category)
            VALUES (?, ?)
            RETURNING id, name, category
            "#,
        )
        .bind(&reader.name)
        .bind(&reader.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// List all readers in storage order
    pub async fn list(&self) -> AppResult<Vec<Reader>> {
        let readers = sqlx::query_as::<_, Reader>("SELECT id, name, category FROM readers")
            .fetch_all(&self.pool)
            .await?;

        Ok(readers)
    }

    /// Case-insensitive substring search over reader names
    pub async fn search(&self, term: &str) -> AppResult<Vec<Reader>> {
        let pattern = format!("%{}%", term);
        let readers =
            sqlx::query_as::<_, Reader>("SELECT id, name, category FROM readers WHERE name LIKE ?")
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await?;

        Ok(readers)
    }
}
