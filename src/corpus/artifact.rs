use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::{Corpus, DataLoadError};

/// One row of the titles artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub title: String,
    /// Provider identifier, absent for rows that cannot be enriched
    #[serde(default)]
    pub tmdb_id: Option<u64>,
}

/// Loads the corpus from a titles artifact and a row-aligned vectors artifact.
///
/// Both files are JSON: the titles file is an array of `{title, tmdb_id}`
/// objects and the vectors file is an array of equal-length numeric arrays.
/// Any inconsistency is fatal; there is no partially loaded corpus.
pub fn load(
    titles_path: impl AsRef<Path>,
    vectors_path: impl AsRef<Path>,
) -> Result<Corpus, DataLoadError> {
    let entries: Vec<CorpusEntry> = read_json(titles_path.as_ref())?;
    let vectors: Vec<Vec<f32>> = read_json(vectors_path.as_ref())?;

    let corpus = Corpus::from_parts(entries, vectors)?;

    tracing::info!(
        rows = corpus.len(),
        dimension = corpus.dimension(),
        "Corpus loaded"
    );

    Ok(corpus)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let display = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|source| DataLoadError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| DataLoadError::Parse {
        path: display,
        source,
    })
}
