//! Interactive session state

use crate::models::account::Role;

/// The authenticated user of the running console, held as a plain value by
/// the caller. There is no process-wide session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}
