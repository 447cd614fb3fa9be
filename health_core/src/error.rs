//! Error types for the health_core library.

use std::io;
use uuid::Uuid;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for health_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Positional access outside the collection
    #[error("No entry at position {index} (collection has {len} entries)")]
    EntryIndex { index: usize, len: usize },

    /// A listed day number (starting at 1) with no entry behind it
    #[error("No entry for day {day} (collection has {len} entries)")]
    DayOutOfRange { day: u32, len: usize },

    /// No entry carries the given identifier
    #[error("No entry with id {0}")]
    EntryNotFound(Uuid),

    /// Export requested while the collection is empty
    #[error("No data to export")]
    NothingToExport,
}
