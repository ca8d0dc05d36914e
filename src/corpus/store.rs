use std::collections::HashMap;

use super::{CorpusEntry, DataLoadError};

/// Title-indexed vector corpus.
///
/// Row `i` of the matrix belongs to `entries[i]`. There are no mutation
/// methods; once built the corpus is read-only for the process lifetime.
#[derive(Debug)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    /// Row-major matrix, `entries.len() * dimension` values
    matrix: Vec<f32>,
    dimension: usize,
    /// Lowercased title -> first row carrying that title
    index: HashMap<String, usize>,
}

impl Corpus {
    /// Builds a corpus from row-aligned entries and vectors, validating shape.
    pub fn from_parts(
        entries: Vec<CorpusEntry>,
        vectors: Vec<Vec<f32>>,
    ) -> Result<Self, DataLoadError> {
        if entries.len() != vectors.len() {
            return Err(DataLoadError::RowCountMismatch {
                titles: entries.len(),
                vectors: vectors.len(),
            });
        }

        let dimension = match vectors.first() {
            Some(row) => row.len(),
            None => return Err(DataLoadError::EmptyCorpus),
        };
        if dimension == 0 {
            return Err(DataLoadError::ZeroDimension);
        }

        let mut matrix = Vec::with_capacity(vectors.len() * dimension);
        for (row, values) in vectors.into_iter().enumerate() {
            if values.len() != dimension {
                return Err(DataLoadError::DimensionMismatch {
                    row,
                    expected: dimension,
                    found: values.len(),
                });
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(DataLoadError::NonFiniteValue { row });
            }
            matrix.extend(values);
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (row, entry) in entries.iter().enumerate() {
            index.entry(entry.title.to_lowercase()).or_insert(row);
        }

        Ok(Self {
            entries,
            matrix,
            dimension,
            index,
        })
    }

    /// Case-insensitive exact title lookup. Absence is not an error.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.index.get(&title.to_lowercase()).copied()
    }

    pub fn entry(&self, index: usize) -> Option<&CorpusEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Feature vector for a row
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        let start = index.checked_mul(self.dimension)?;
        self.matrix.get(start..start + self.dimension)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Titles starting with `query` (case-insensitive), in corpus order.
    pub fn titles_with_prefix(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| entry.title.to_lowercase().starts_with(&query))
            .map(|entry| entry.title.as_str())
            .take(limit)
            .collect()
    }
}
