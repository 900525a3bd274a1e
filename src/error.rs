//! Error types for the editor.
//!
//! Mutations on the layout never fail; the fallible edges are reading the
//! settings file and writing the generated markup to the system clipboard.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur outside the pure layout model
#[derive(Error, Debug)]
pub enum GridError {
    /// Settings file could not be read
    #[error("failed to read settings from {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for the settings schema
    #[error("invalid settings in {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The platform clipboard has no text after the write
    #[error("clipboard is unavailable")]
    ClipboardUnavailable,

    /// The platform clipboard holds different text than was written
    #[error("clipboard contents did not match the generated markup")]
    ClipboardMismatch,
}

/// Result type alias for editor operations
pub type GridResult<T> = Result<T, GridError>;
