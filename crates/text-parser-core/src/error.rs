//! Error types for text-parser-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a word-embedding table.
///
/// The analysis pipeline never surfaces these: a table that fails to load is
/// treated as unavailable and lookups return no neighbors.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// The embedding file could not be opened or read.
    #[error("failed to read embedding table {path}: {source}")]
    Io {
        /// Path of the embedding file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from an in-memory or streamed source failed.
    #[error("failed to read embedding data: {0}")]
    Read(#[from] std::io::Error),

    /// The source contained no usable vectors.
    #[error("embedding table contains no vectors")]
    Empty,
}

/// Result type alias using [`EmbeddingError`].
pub type EmbeddingResult<T> = Result<T, EmbeddingError>;
