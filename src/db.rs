//! SQLite pool construction and startup diagnostics

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Startup connection failures, split so the caller can print a distinct
/// diagnostic for a missing database versus any other failure.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("database file '{0}' does not exist")]
    DatabaseMissing(String),

    #[error("could not connect to database: {0}")]
    Connection(#[from] sqlx::Error),
}

/// Open the connection pool described by the configuration.
///
/// With `create_if_missing` disabled, a missing database file is reported as
/// [`ConnectError::DatabaseMissing`] before any connection is attempted.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, ConnectError> {
    if !config.create_if_missing {
        if let Some(path) = database_file(&config.url) {
            if !Path::new(&path).exists() {
                return Err(ConnectError::DatabaseMissing(path));
            }
        }
    }

    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(config.create_if_missing)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Extract the filesystem path from a `sqlite:` URL, if it names a file.
fn database_file(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_file_strips_scheme_and_query() {
        assert_eq!(
            database_file("sqlite://biblioteca.db"),
            Some("biblioteca.db".to_string())
        );
        assert_eq!(
            database_file("sqlite:/var/lib/biblioteca.db?mode=rwc"),
            Some("/var/lib/biblioteca.db".to_string())
        );
    }

    #[test]
    fn in_memory_urls_have_no_file() {
        assert_eq!(database_file("sqlite::memory:"), None);
        assert_eq!(database_file("postgres://x"), None);
    }
}
