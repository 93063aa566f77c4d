// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the commit-msg application.
//!
//! These cover the I/O glue around the validator: configuration files,
//! locale packs and reading the message file. The validator itself never
//! fails; it always produces a [`Verdict`](crate::state::Verdict).

use std::path::PathBuf;
use thiserror::Error;

use crate::state::Verdict;

/// The main error type for commit-msg operations.
#[derive(Error, Debug)]
pub enum CommitMsgError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Locale errors
    #[error("Language error: {0}")]
    Lang(#[from] LangError),

    // Message acquisition errors
    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    #[error("Failed to parse configuration {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Locale pack errors.
#[derive(Error, Debug)]
pub enum LangError {
    #[error("Language file not found for '{lang}'")]
    NotFound { lang: String },

    #[error("Failed to load language file {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Failed to render {template} template: {message}")]
    RenderFailed { template: String, message: String },
}

/// Errors while obtaining the commit message to validate.
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("Commit message file argument missing")]
    ArgumentMissing,

    #[error("File {path} not exists")]
    FileMissing { path: PathBuf },

    #[error("Read file {path} error: {message}")]
    ReadError { path: PathBuf, message: String },
}

impl MessageError {
    /// The verdict reported to the user for this acquisition failure.
    pub fn verdict(&self) -> Verdict {
        match self {
            MessageError::ArgumentMissing => Verdict::ArgumentMissing,
            MessageError::FileMissing { path } => Verdict::FileMissing {
                path: path.display().to_string(),
            },
            MessageError::ReadError { path, .. } => Verdict::ReadError {
                path: path.display().to_string(),
            },
        }
    }
}

/// Result type alias for commit-msg operations.
pub type Result<T> = std::result::Result<T, CommitMsgError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CommitMsgError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
