//! NLP capability interface.
//!
//! The pipeline talks to language tooling only through [`NlpBackend`]. Every
//! operation is infallible at the type level: a backend that cannot answer
//! returns the degraded default (`und`, an empty list, or `0.0`) instead of
//! an error.
//!
//! [`BuiltinBackend`] is the self-contained implementation shipped with this
//! crate. It composes:
//!
//! - [`language`] - script detection plus stopword-profile scoring
//! - [`entities`] - gazetteer and capitalization based name classification
//! - [`sentiment`] - lexicon scoring with negation and intensity modifiers
//! - [`lemma`] - irregular-form dictionary plus suffix rules
//! - [`embedding`] - nearest neighbors over a word2vec/GloVe text table

pub mod embedding;
pub mod entities;
pub mod language;
pub mod lemma;
pub mod sentiment;

mod builtin;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use builtin::BuiltinBackend;
pub use embedding::EmbeddingTable;

/// Default number of embedding neighbors listed per lemma.
pub const DEFAULT_NEIGHBOR_COUNT: usize = 10;

/// Capabilities the analysis pipeline needs from a language toolkit.
pub trait NlpBackend {
    /// Most probable language of `text`, or [`LanguageTag::undetermined`].
    fn detect_language(&self, text: &str) -> LanguageTag;

    /// Organizations, persons and places mentioned in `text`, in text order.
    fn extract_entities(&self, text: &str) -> Vec<Entity>;

    /// Sentiment polarity of the first paragraph of `text`, `0.0` when unknown.
    fn score_sentiment(&self, text: &str) -> f64;

    /// Base form of every word in `text`, in text order.
    fn lemmatize(&self, text: &str) -> Vec<String>;

    /// Nearest embedding neighbors of `lemma`, nearest first.
    fn embed_neighbors(&self, lemma: &str) -> Vec<Neighbor>;
}

/// A language identifier: a lowercase ISO 639-1 code or `und`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Code used when no language could be determined.
    pub const UNDETERMINED: &'static str = "und";

    /// Create a tag from a language code, lowercasing it.
    pub fn new(code: impl AsRef<str>) -> Self {
        let code = code.as_ref().trim();
        if code.is_empty() {
            Self::undetermined()
        } else {
            Self(code.to_lowercase())
        }
    }

    /// The "undetermined" tag.
    pub fn undetermined() -> Self {
        Self(Self::UNDETERMINED.to_string())
    }

    /// Whether this is the "undetermined" tag.
    pub fn is_undetermined(&self) -> bool {
        self.0 == Self::UNDETERMINED
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self::undetermined()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named-entity categories kept by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    /// Companies, institutions, agencies.
    Organization,
    /// People.
    Person,
    /// Countries, cities, regions.
    Place,
}

impl EntityCategory {
    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Person => "Person",
            Self::Place => "Place",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized name span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// What the span refers to.
    pub category: EntityCategory,
    /// The matched text, as written in the input.
    pub text: String,
    /// Byte offset of the span start (inclusive).
    pub start: usize,
    /// Byte offset of the span end (exclusive).
    pub end: usize,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.text)
    }
}

/// One nearest-neighbor entry of an embedding lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// The neighboring word.
    pub word: String,
    /// Cosine distance to the query word (`0.0` = same direction).
    pub distance: f64,
}

impl fmt::Display for Neighbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the decimal point on whole numbers ("1.0").
        write!(f, "{} has a distance of {:?}", self.word, self.distance)
    }
}
