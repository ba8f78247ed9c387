//! The self-contained backend shipped with the crate.

use camino::Utf8PathBuf;

use super::embedding::{EmbeddingTable, LazyEmbeddings};
use super::entities::EntityExtractor;
use super::{
    DEFAULT_NEIGHBOR_COUNT, Entity, LanguageTag, Neighbor, NlpBackend, language, lemma, sentiment,
};
use crate::config::Config;

/// Rule- and dictionary-based [`NlpBackend`].
///
/// Everything except the embedding table is compiled in. The table is read
/// from disk on the first neighbor lookup; without one, lookups return no
/// neighbors.
#[derive(Debug)]
pub struct BuiltinBackend {
    entities: EntityExtractor,
    embeddings: LazyEmbeddings,
    neighbor_count: usize,
}

impl Default for BuiltinBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinBackend {
    /// A backend with name joining on and no embedding table.
    pub fn new() -> Self {
        Self {
            entities: EntityExtractor::default(),
            embeddings: LazyEmbeddings::default(),
            neighbor_count: DEFAULT_NEIGHBOR_COUNT,
        }
    }

    /// A backend configured from [`Config`].
    pub fn from_config(config: &Config) -> Self {
        let backend = Self::new()
            .with_join_names(config.join_names)
            .with_neighbor_count(config.neighbor_count);
        match config.resolved_embeddings_path() {
            Some(path) => backend.with_embeddings_path(path),
            None => backend,
        }
    }

    /// Toggle joining adjacent capitalized words into one entity.
    pub fn with_join_names(mut self, join_names: bool) -> Self {
        self.entities = EntityExtractor::new(join_names);
        self
    }

    /// Maximum number of neighbors returned per lemma.
    pub fn with_neighbor_count(mut self, count: usize) -> Self {
        self.neighbor_count = count;
        self
    }

    /// Load the embedding table from `path` on first use.
    pub fn with_embeddings_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.embeddings = LazyEmbeddings::from_path(path);
        self
    }

    /// Use an already loaded embedding table.
    pub fn with_embedding_table(mut self, table: EmbeddingTable) -> Self {
        self.embeddings = LazyEmbeddings::from_table(table);
        self
    }

    /// The embedding table, loading it if needed.
    pub fn embeddings(&self) -> Option<&EmbeddingTable> {
        self.embeddings.get()
    }
}

impl NlpBackend for BuiltinBackend {
    fn detect_language(&self, text: &str) -> LanguageTag {
        language::detect(text)
    }

    fn extract_entities(&self, text: &str) -> Vec<Entity> {
        self.entities.extract(text)
    }

    fn score_sentiment(&self, text: &str) -> f64 {
        sentiment::score(text)
    }

    fn lemmatize(&self, text: &str) -> Vec<String> {
        lemma::lemmatize(text)
    }

    fn embed_neighbors(&self, lemma: &str) -> Vec<Neighbor> {
        self.embeddings
            .get()
            .map(|table| table.neighbors(lemma, self.neighbor_count))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn table() -> EmbeddingTable {
        let text = "dog 1 0\npuppy 0.9 0.1\ncat 0.5 0.5\ncar 0 1\n";
        EmbeddingTable::from_reader(Cursor::new(text)).unwrap()
    }

    #[test]
    fn without_table_there_are_no_neighbors() {
        assert!(BuiltinBackend::new().embed_neighbors("dog").is_empty());
    }

    #[test]
    fn neighbor_count_limits_lookups() {
        let backend = BuiltinBackend::new()
            .with_embedding_table(table())
            .with_neighbor_count(2);
        let words: Vec<String> = backend
            .embed_neighbors("dog")
            .into_iter()
            .map(|n| n.word)
            .collect();
        assert_eq!(words, vec!["puppy", "cat"]);
    }

    #[test]
    fn from_config_applies_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("en.txt")).unwrap();
        std::fs::write(&path, "dog 1 0\ncat 0 1\n").unwrap();

        let config = Config {
            embeddings_path: Some(path),
            neighbor_count: 1,
            join_names: false,
            ..Config::default()
        };
        let backend = BuiltinBackend::from_config(&config);

        assert_eq!(backend.embed_neighbors("dog").len(), 1);
        let entities = backend.extract_entities("They moved to New York");
        assert!(entities.iter().all(|e| e.text != "New York"));
    }

    #[test]
    fn trait_object_dispatch() {
        let backend: &dyn NlpBackend = &BuiltinBackend::new();
        assert_eq!(backend.detect_language("the dogs are barking").as_str(), "en");
        assert_eq!(backend.lemmatize("dogs"), vec!["dog"]);
    }
}
