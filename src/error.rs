//! Error types for the landing page widgets.
//!
//! Validation failures are deliberately absent: a failing field is a `false`
//! result plus presentation state, never an error value.

use thiserror::Error;

/// Errors that can occur while driving the form, the chat or the stores.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A page element the operation depends on is absent.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// The field identifier is not one of the declared form fields.
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// The simulated submission rejected.
    #[error("Submission failed: {0}")]
    Submission(String),

    /// A timed wait was cancelled before it completed.
    #[error("Operation cancelled")]
    Cancelled,

    /// A stored preference value could not be interpreted.
    #[error("Invalid preference value for '{key}': {value}")]
    InvalidPreference { key: String, value: String },

    /// Preference store failure.
    #[error("Preference store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// Transcript template failure.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
