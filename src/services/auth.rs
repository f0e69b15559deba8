//! Authentication, password hashing and permission checks

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    audit::AuditLog,
    error::{AppError, AppResult},
    models::{account::Role, session::Session},
    repository::Repository,
};

/// Pure role check against the current session.
///
/// Admin satisfies the user tier; no session satisfies nothing.
pub fn has_permission(session: Option<&Session>, required: Role) -> bool {
    match (session, required) {
        (None, _) => false,
        (Some(s), Role::Admin) => s.role == Role::Admin,
        (Some(_), Role::User) => true,
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    audit: AuditLog,
}

impl AuthService {
    pub fn new(repository: Repository, audit: AuditLog) -> Self {
        Self { repository, audit }
    }

    /// Authenticate by username and password, returning a new session.
    ///
    /// Unknown usernames and wrong passwords fail with the same message so
    /// the caller cannot tell which check failed. Either outcome is
    /// recorded in the audit log.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        let account = self.repository.accounts.get_by_username(username).await?;

        let verified = match &account {
            Some(account) => verify_password(password, &account.password_hash)?,
            None => false,
        };

        match (account, verified) {
            (Some(account), true) => {
                self.audit.record(Some(&account.username), "Login succeeded");
                tracing::info!(username = %account.username, role = %account.role, "login");
                Ok(Session {
                    username: account.username,
                    role: account.role,
                })
            }
            _ => {
                self.audit
                    .record(None, &format!("Failed login attempt for '{}'", username));
                Err(AppError::Authentication(
                    "Invalid username or password".to_string(),
                ))
            }
        }
    }

    /// End a session. The session value is consumed; the caller goes back
    /// to anonymous.
    pub fn logout(&self, session: Session) {
        self.audit.record(Some(&session.username), "Logged out");
        tracing::info!(username = %session.username, "logout");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            username: "someone".to_string(),
            role,
        }
    }

    #[test]
    fn admin_permission_requires_admin_role() {
        assert!(has_permission(Some(&session(Role::Admin)), Role::Admin));
        assert!(!has_permission(Some(&session(Role::User)), Role::Admin));
        assert!(!has_permission(None, Role::Admin));
    }

    #[test]
    fn user_permission_accepts_both_roles() {
        assert!(has_permission(Some(&session(Role::Admin)), Role::User));
        assert!(has_permission(Some(&session(Role::User)), Role::User));
        assert!(!has_permission(None, Role::User));
    }

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("secret123").unwrap();
        assert!(verify_password("secret123", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_internal_error() {
        assert!(verify_password("secret123", "not-a-phc-string").is_err());
    }
}
