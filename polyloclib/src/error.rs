//! Error types for polyloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during LOC counting
#[derive(Error, Debug)]
pub enum PolylocError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Two language definitions share the same name
    #[error("duplicate language definition: {0}")]
    DuplicateLanguage(String),

    /// Two language definitions claim the same exact filename
    #[error("filename '{filename}' claimed by both {first} and {second}")]
    ConflictingFilename {
        filename: String,
        first: String,
        second: String,
    },

    /// Two language definitions claim the same file extension
    #[error("extension '{extension}' claimed by both {first} and {second}")]
    ConflictingExtension {
        extension: String,
        first: String,
        second: String,
    },

    /// Two language definitions claim the same shebang interpreter
    #[error("shebang interpreter '{interpreter}' claimed by both {first} and {second}")]
    ConflictingShebang {
        interpreter: String,
        first: String,
        second: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
