//! # Error Types
//!
//! This module defines error types used throughout the conserje library.

use thiserror::Error;

/// Main error type for conserje operations
#[derive(Debug, Error)]
pub enum ConserjeError {
    /// Malformed JSON during import or deserialization
    #[error("Parse error: {0}")]
    Parse(String),

    /// Missing page, template, or library entry
    #[error("Not found: {0}")]
    NotFound(String),

    /// Attempt to delete the only remaining library entry
    #[error("Cannot delete the last entry: {0}")]
    LastEntry(String),

    /// Event element content that does not decode as an event payload
    #[error("Invalid event content: {0}")]
    InvalidEventContent(String),

    /// Persistence collaborator failure
    #[error("Store error: {0}")]
    Store(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
