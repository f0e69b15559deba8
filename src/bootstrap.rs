//! First-run provisioning: schema creation and default accounts
//!
//! Both steps are idempotent for a single process: tables are created with
//! `IF NOT EXISTS` and accounts are seeded only when their username is
//! absent. Nothing here guards against concurrent bootstrap runs.

use sqlx::sqlite::SqlitePool;

use crate::{audit::AuditLog, error::AppResult, models::account::Role, repository::Repository, services::auth};

/// Database schema, four relations
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    role TEXT NOT NULL CHECK (role IN ('admin', 'user'))
);

CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    year INTEGER NOT NULL,
    available BOOLEAN NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS readers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS loans (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    reader_id INTEGER NOT NULL REFERENCES readers(id),
    book_id INTEGER NOT NULL REFERENCES books(id),
    loan_date DATE NOT NULL,
    return_date DATE
);
"#;

/// Fixed default accounts, one per role
const DEFAULT_ACCOUNTS: &[(&str, &str, Role)] = &[
    ("admin", "admin123", Role::Admin),
    ("user", "user123", Role::User),
];

/// Create the schema if it does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> AppResult<()> {
    // sqlx::query runs a single statement, so the DDL is split
    for statement in SCHEMA.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Seed the default accounts, skipping usernames that already exist.
/// Returns the number of accounts created.
pub async fn seed_default_accounts(
    repository: &Repository,
    audit: &AuditLog,
) -> AppResult<usize> {
    let mut created = 0;
    for (username, password, role) in DEFAULT_ACCOUNTS {
        if repository.accounts.get_by_username(username).await?.is_some() {
            continue;
        }

        let hash = auth::hash_password(password)?;
        repository.accounts.create(username, &hash, *role).await?;
        audit.record(None, &format!("Default account created: {}", username));
        tracing::info!(username, role = %role, "default account created");
        created += 1;
    }
    Ok(created)
}
