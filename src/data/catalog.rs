use serde::Deserialize;
use std::path::Path;

use super::{read_json, ArtifactError};
use crate::models::MovieRecord;

/// Row as it appears in the catalog artifact
#[derive(Debug, Deserialize)]
struct CatalogRow {
    title: String,
    #[serde(default)]
    overview: Option<String>,
    vote_average: f64,
    popularity: f64,
}

/// Immutable, row-indexed table of movie records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    /// Builds a catalog from records, reassigning `row_index` from position
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        let movies = movies
            .into_iter()
            .enumerate()
            .map(|(row_index, movie)| MovieRecord { row_index, ..movie })
            .collect();

        Self { movies }
    }

    /// Loads the catalog artifact (a JSON array of movie rows)
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let rows: Vec<CatalogRow> = read_json(path)?;

        let movies = rows
            .into_iter()
            .enumerate()
            .map(|(row_index, row)| MovieRecord {
                row_index,
                title: row.title,
                overview: row.overview.unwrap_or_default(),
                vote_average: row.vote_average,
                popularity: row.popularity,
            })
            .collect();

        Ok(Self { movies })
    }

    pub fn get(&self, row_index: usize) -> Option<&MovieRecord> {
        self.movies.get(row_index)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.movies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_assigns_dense_row_indices() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"title": "Avatar", "overview": "Marines on Pandora", "vote_average": 7.2, "popularity": 150.4}},
                {{"title": "Titanic", "overview": "A doomed voyage", "vote_average": 7.5, "popularity": 100.0}}
            ]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().title, "Avatar");
        assert_eq!(catalog.get(1).unwrap().row_index, 1);
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_load_tolerates_missing_overview() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "Untitled", "overview": null, "vote_average": 0.0, "popularity": 0.1}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.get(0).unwrap().overview, "");
    }

    #[test]
    fn test_load_rejects_missing_rating() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Avatar", "popularity": 1.0}}]"#).unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }

    #[test]
    fn test_new_reassigns_row_indices() {
        let record = |title: &str| MovieRecord {
            row_index: 42,
            title: title.to_string(),
            overview: String::new(),
            vote_average: 0.0,
            popularity: 0.0,
        };

        let catalog = Catalog::new(vec![record("A"), record("B")]);
        let indices: Vec<usize> = catalog.iter().map(|m| m.row_index).collect();
        assert_eq!(indices, vec![0, 1]);
    }
}
