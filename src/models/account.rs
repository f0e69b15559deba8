//! Login account model and role enum

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Access tier governing which operations are permitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::User => "user",
        };
        write!(f, "{}", label)
    }
}

/// Account model from database
///
/// An account is a login credential, distinct from a [`Reader`](super::reader::Reader)
/// who borrows books.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}
