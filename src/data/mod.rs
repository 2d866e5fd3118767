//! Startup artifacts and the read-only context built from them.

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

pub mod catalog;
pub mod similarity;
pub mod title_index;
pub mod vectorizer;

pub use catalog::Catalog;
pub use similarity::SimilarityIndex;
pub use title_index::{normalize_title, TitleIndex};
pub use vectorizer::VectorizerInfo;

pub const CATALOG_FILE: &str = "movies.json";
pub const VECTORIZER_FILE: &str = "tfidf.json";
pub const FEATURES_FILE: &str = "tfidf_matrix.json";
pub const TITLE_INDEX_FILE: &str = "indices.json";

/// Failure to load or validate a startup artifact. Always fatal.
#[derive(thiserror::Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Inconsistent artifacts: {0}")]
    Inconsistent(String),
}

/// Opens, parses and closes one JSON artifact
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let file = File::open(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Everything the recommender reads, loaded once and never mutated
#[derive(Debug, Clone)]
pub struct MovieContext {
    pub catalog: Catalog,
    pub features: SimilarityIndex,
    pub titles: TitleIndex,
    pub vectorizer: Option<VectorizerInfo>,
    pub loaded_at: DateTime<Utc>,
}

impl MovieContext {
    /// Assembles a context from already-built parts, checking they line up
    pub fn new(
        catalog: Catalog,
        features: SimilarityIndex,
        titles: TitleIndex,
    ) -> Result<Self, ArtifactError> {
        if catalog.len() != features.len() {
            return Err(ArtifactError::Inconsistent(format!(
                "catalog has {} movies but feature matrix has {} rows",
                catalog.len(),
                features.len()
            )));
        }

        if let Some(row) = titles.max_row().filter(|&row| row >= catalog.len()) {
            return Err(ArtifactError::Inconsistent(format!(
                "title index points at row {} but catalog has {} movies",
                row,
                catalog.len()
            )));
        }

        Ok(Self {
            catalog,
            features,
            titles,
            vectorizer: None,
            loaded_at: Utc::now(),
        })
    }

    /// Loads all four artifacts from `data_dir`
    pub fn load(data_dir: &Path) -> Result<Self, ArtifactError> {
        let catalog = Catalog::load(&data_dir.join(CATALOG_FILE))?;
        let vectorizer = VectorizerInfo::load(&data_dir.join(VECTORIZER_FILE))?;
        let features = SimilarityIndex::load(&data_dir.join(FEATURES_FILE))?;
        let titles = TitleIndex::load(&data_dir.join(TITLE_INDEX_FILE))?;

        if vectorizer.dimensions() != features.dimensions() {
            return Err(ArtifactError::Inconsistent(format!(
                "vectorizer emits {} features but matrix has {} columns",
                vectorizer.dimensions(),
                features.dimensions()
            )));
        }

        let context = Self {
            vectorizer: Some(vectorizer),
            ..Self::new(catalog, features, titles)?
        };

        tracing::info!(
            data_dir = %data_dir.display(),
            movies = context.catalog.len(),
            titles = context.titles.len(),
            dimensions = context.features.dimensions(),
            "Loaded recommendation artifacts"
        );

        Ok(context)
    }
}
