//! Biblioteca - console library management system
//!
//! Authenticates librarians against stored accounts and manages a catalog
//! of books, readers, and loans in a SQLite database.

pub mod audit;
pub mod bootstrap;
pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
