//! Domain models

pub mod account;
pub mod book;
pub mod loan;
pub mod reader;
pub mod session;
