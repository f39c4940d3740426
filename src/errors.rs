//! Unified application error type.
//! All modules (db, core, sync, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid cadence: {0}")]
    InvalidCadence(String),

    #[error("Invalid completion status: {0}")]
    InvalidCompletion(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No entry found with id {0}")]
    EntryNotFound(i64),

    #[error("No template found with id {0}")]
    TemplateNotFound(i64),

    #[error("Entry {0} is already linked to template {1}")]
    AlreadyPermanent(i64, i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Cloud mirror errors
    // ---------------------------
    #[error("Sync error: {0}")]
    Sync(String),
}

pub type AppResult<T> = Result<T, AppError>;
