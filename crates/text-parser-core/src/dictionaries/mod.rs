//! Dictionaries for the builtin NLP backend.
//!
//! Provides curated word sets used by sentence-boundary detection,
//! lemmatization, sentiment scoring and entity classification.

pub mod abbreviations;
pub mod gazetteers;
pub mod irregular_forms;
pub mod sentiment_lexicon;
