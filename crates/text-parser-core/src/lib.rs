//! Core library for text-parser.
//!
//! This crate provides the analysis pipeline used by the `text-parser` CLI:
//! language detection, named-entity extraction, sentiment scoring,
//! lemmatization and word-embedding neighbor lookup.
//!
//! # Modules
//!
//! - [`nlp`] - The [`NlpBackend`] capability interface and the builtin backend
//! - [`pipeline`] - Sequencing of backend calls into an [`AnalysisReport`]
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use text_parser_core::{BuiltinBackend, pipeline};
//!
//! let backend = BuiltinBackend::new();
//! let report = pipeline::analyze(&backend, "Alice loves Paris");
//!
//! assert_eq!(report.language.as_str(), "en");
//! assert!(report.sentiment > 0.0);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, EmbeddingError, EmbeddingResult};
pub use nlp::{
    BuiltinBackend, EmbeddingTable, Entity, EntityCategory, LanguageTag, Neighbor, NlpBackend,
};
pub use pipeline::{AnalysisReport, LemmaAlternatives};

/// Default maximum input size for `--file` input (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
