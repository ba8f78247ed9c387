//! Word-embedding nearest-neighbor lookup.
//!
//! Tables use the word2vec/GloVe text format: one `word v1 v2 ... vd` entry
//! per line, optionally preceded by a `count dim` header. Vectors are
//! L2-normalized at load time so cosine similarity is a plain dot product.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::OnceLock;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, instrument};

use super::Neighbor;
use crate::error::{EmbeddingError, EmbeddingResult};

/// An in-memory embedding table.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingTable {
    dimension: usize,
    words: Vec<String>,
    index: HashMap<String, usize>,
    /// Row-major, `words.len() * dimension` unit-length components.
    vectors: Vec<f32>,
}

impl EmbeddingTable {
    /// Load a table from a file.
    #[instrument(skip_all, fields(path = %path))]
    pub fn open(path: &Utf8Path) -> EmbeddingResult<Self> {
        let file = File::open(path).map_err(|source| EmbeddingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(BufReader::new(file))?;
        debug!(words = table.len(), dimension = table.dimension, "embedding table loaded");
        Ok(table)
    }

    /// Parse a table from any buffered reader.
    ///
    /// Malformed or non-UTF-8 lines, lines whose dimension differs from the
    /// first entry and all-zero vectors are skipped. The first occurrence of
    /// a repeated word wins.
    pub fn from_reader<R: BufRead>(mut reader: R) -> EmbeddingResult<Self> {
        let mut table = Self {
            dimension: 0,
            words: Vec::new(),
            index: HashMap::new(),
            vectors: Vec::new(),
        };

        let mut buf = Vec::new();
        for line_no in 0usize.. {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                debug!(line = line_no + 1, "skipping embedding line that is not UTF-8");
                continue;
            };
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let values: Result<Vec<f32>, _> = fields.map(str::parse::<f32>).collect();
            let Ok(mut values) = values else {
                debug!(line = line_no + 1, "skipping malformed embedding line");
                continue;
            };

            if line_no == 0 && is_header(word, &values) {
                continue;
            }
            if values.is_empty() {
                debug!(line = line_no + 1, "skipping embedding line without vector");
                continue;
            }
            if table.dimension == 0 {
                table.dimension = values.len();
            } else if values.len() != table.dimension {
                debug!(
                    line = line_no + 1,
                    expected = table.dimension,
                    found = values.len(),
                    "skipping embedding line with mismatched dimension"
                );
                continue;
            }
            if table.index.contains_key(word) {
                continue;
            }

            let norm = values.iter().map(|v| v * v).sum::<f32>().sqrt();
            if norm == 0.0 || !norm.is_finite() {
                debug!(line = line_no + 1, "skipping zero-length embedding vector");
                continue;
            }
            for value in &mut values {
                *value /= norm;
            }

            table.index.insert(word.to_string(), table.words.len());
            table.words.push(word.to_string());
            table.vectors.extend(values);
        }

        if table.words.is_empty() {
            return Err(EmbeddingError::Empty);
        }
        Ok(table)
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Vector dimension.
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether `word` (or its lowercase form) is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Up to `max` nearest neighbors of `word`, nearest first.
    ///
    /// Distances are cosine distances (`1 - cos`) rounded to six decimals;
    /// ties keep table order. Unknown words have no neighbors.
    pub fn neighbors(&self, word: &str, max: usize) -> Vec<Neighbor> {
        let Some(query) = self.lookup(word) else {
            return Vec::new();
        };
        if max == 0 {
            return Vec::new();
        }

        let target = self.row(query);
        let mut scored: Vec<(f64, usize)> = (0..self.words.len())
            .filter(|&idx| idx != query)
            .map(|idx| {
                let dot: f32 = self.row(idx).iter().zip(target).map(|(a, b)| a * b).sum();
                (round6(1.0 - f64::from(dot)), idx)
            })
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        scored.truncate(max);

        scored
            .into_iter()
            .map(|(distance, idx)| Neighbor {
                word: self.words[idx].clone(),
                distance,
            })
            .collect()
    }

    fn lookup(&self, word: &str) -> Option<usize> {
        self.index
            .get(word)
            .or_else(|| self.index.get(&word.to_lowercase()))
            .copied()
    }

    fn row(&self, idx: usize) -> &[f32] {
        &self.vectors[idx * self.dimension..(idx + 1) * self.dimension]
    }
}

/// A `count dim` header: a numeric first field and exactly one more number.
fn is_header(word: &str, values: &[f32]) -> bool {
    values.len() == 1 && word.parse::<usize>().is_ok()
}

fn round6(value: f64) -> f64 {
    let rounded = (value * 1_000_000.0).round() / 1_000_000.0;
    // Avoid printing "-0.0" for identical directions.
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// An embedding table loaded on first use.
///
/// A missing or unreadable file leaves the table unavailable for the rest
/// of the process; lookups then return no neighbors.
#[derive(Debug, Default)]
pub struct LazyEmbeddings {
    path: Option<Utf8PathBuf>,
    table: OnceLock<Option<EmbeddingTable>>,
}

impl LazyEmbeddings {
    /// Defer loading the table at `path` until the first lookup.
    pub fn from_path(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            table: OnceLock::new(),
        }
    }

    /// Wrap an already loaded table.
    pub fn from_table(table: EmbeddingTable) -> Self {
        Self {
            path: None,
            table: OnceLock::from(Some(table)),
        }
    }

    /// The configured table path, if any.
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// The table, loading it on first call.
    pub fn get(&self) -> Option<&EmbeddingTable> {
        self.table
            .get_or_init(|| {
                let path = self.path.as_deref()?;
                match EmbeddingTable::open(path) {
                    Ok(table) => Some(table),
                    Err(err) => {
                        debug!(%path, error = %err, "embedding table unavailable");
                        None
                    }
                }
            })
            .as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TABLE: &str = "\
5 3
dog 1.0 0.0 0.0
puppy 0.9 0.1 0.0
cat 0.5 0.5 0.0
car 0.0 0.0 1.0
bone 0.7 0.3 0.0
";

    fn table() -> EmbeddingTable {
        EmbeddingTable::from_reader(Cursor::new(TABLE)).unwrap()
    }

    #[test]
    fn header_is_skipped() {
        let table = table();
        assert_eq!(table.len(), 5);
        assert_eq!(table.dimension(), 3);
        assert!(!table.contains("5"));
    }

    #[test]
    fn neighbors_are_nearest_first_and_exclude_query() {
        let found = table().neighbors("dog", 10);
        let words: Vec<&str> = found.iter().map(|n| n.word.as_str()).collect();
        assert_eq!(words, vec!["puppy", "bone", "cat", "car"]);
        assert!(found.windows(2).all(|w| w[0].distance <= w[1].distance));
        assert_eq!(found[3].distance, 1.0);
    }

    #[test]
    fn neighbor_count_is_limited() {
        assert_eq!(table().neighbors("dog", 2).len(), 2);
        assert!(table().neighbors("dog", 0).is_empty());
    }

    #[test]
    fn unknown_words_have_no_neighbors() {
        assert!(table().neighbors("zebra", 10).is_empty());
    }

    #[test]
    fn lookup_falls_back_to_lowercase() {
        assert_eq!(table().neighbors("Dog", 1)[0].word, "puppy");
    }

    #[test]
    fn bad_lines_are_skipped() {
        let text = "dog 1 0\ncat 1 x\nbird 1 0 0\nzero 0 0\nfox 0 1\ndog 0 1\n";
        let table = EmbeddingTable::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.contains("cat"));
        assert!(!table.contains("bird"));
        assert!(!table.contains("zero"));
        // First entry for "dog" wins.
        assert_eq!(table.neighbors("dog", 1)[0].distance, 1.0);
    }

    #[test]
    fn non_utf8_lines_are_skipped() {
        let bytes: &[u8] = b"4 2\ndog 1 0\ncaf\xe9 0.5 0.5\ncat 0 1\n";
        let table = EmbeddingTable::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("dog"));
        assert!(table.contains("cat"));
    }

    #[test]
    fn empty_table_is_an_error() {
        let err = EmbeddingTable::from_reader(Cursor::new("\n\n")).unwrap_err();
        assert!(matches!(err, EmbeddingError::Empty));
    }

    #[test]
    fn open_reports_missing_file() {
        let err = EmbeddingTable::open(Utf8Path::new("/nonexistent/embeddings.txt")).unwrap_err();
        assert!(matches!(err, EmbeddingError::Io { .. }));
    }

    #[test]
    fn lazy_table_loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("vectors.txt")).unwrap();
        std::fs::write(&path, TABLE).unwrap();

        let lazy = LazyEmbeddings::from_path(&path);
        assert_eq!(lazy.path(), Some(path.as_path()));
        assert_eq!(lazy.get().map(EmbeddingTable::len), Some(5));
    }

    #[test]
    fn lazy_table_missing_file_is_unavailable() {
        let lazy = LazyEmbeddings::from_path("/nonexistent/embeddings.txt");
        assert!(lazy.get().is_none());
        assert!(LazyEmbeddings::default().get().is_none());
    }
}
