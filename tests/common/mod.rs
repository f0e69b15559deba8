//! Shared test fixtures: an in-memory database with the full schema,
//! a throwaway audit log, and ready-made sessions.

use std::path::PathBuf;

use sqlx::sqlite::SqlitePoolOptions;

use biblioteca::{
    audit::AuditLog,
    bootstrap,
    models::{account::Role, session::Session},
    repository::Repository,
    services::Services,
};

pub struct TestApp {
    pub services: Services,
    pub repository: Repository,
    pub audit_path: PathBuf,
    _tempdir: tempfile::TempDir,
}

pub async fn setup() -> TestApp {
    // One connection: every connection to :memory: is a separate database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");

    bootstrap::ensure_schema(&pool).await.expect("schema");

    let repository = Repository::new(pool);
    let tempdir = tempfile::tempdir().expect("tempdir");
    let audit_path = tempdir.path().join("audit.log");
    let audit = AuditLog::new(audit_path.clone());
    let services = Services::new(repository.clone(), audit);

    TestApp {
        services,
        repository,
        audit_path,
        _tempdir: tempdir,
    }
}

#[allow(dead_code)]
pub fn admin_session() -> Session {
    Session {
        username: "admin".to_string(),
        role: Role::Admin,
    }
}

#[allow(dead_code)]
pub fn user_session() -> Session {
    Session {
        username: "user".to_string(),
        role: Role::User,
    }
}
