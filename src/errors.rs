//! Unified application error type.
//! All modules (api, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // HTTP / API
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (HTTP {status}): {message}")]
    Server {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("API error: {0}")]
    Api(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid region code: {0}")]
    InvalidRegion(String),

    #[error("Invalid habitat code: {0}")]
    InvalidHabitat(String),

    #[error("Invalid project level: {0}")]
    InvalidLevel(String),

    #[error("Invalid attachment trend: {0}")]
    InvalidTrend(String),

    #[error("Invalid grade: {0}")]
    InvalidGrade(String),

    #[error("Invalid transplant method: {0}")]
    InvalidMethod(String),

    #[error("Invalid sea condition: {0}")]
    InvalidCondition(String),

    #[error("Invalid media category: {0}")]
    InvalidCategory(String),

    #[error("Invalid activity type: {0}")]
    InvalidActivity(String),

    #[error("Invalid review status: {0}")]
    InvalidStatus(String),

    #[error("Invalid sort direction: {0}")]
    InvalidSortDir(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
