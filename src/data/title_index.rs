use std::collections::HashMap;
use std::path::Path;

use super::{read_json, ArtifactError};

/// Normalizes a title for lookup: trims surrounding whitespace and lowercases
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Ordered mapping from normalized title to catalog row
///
/// Entries keep the position of the first time their normalized title was
/// seen. When two rows normalize to the same title, the later row wins.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    entries: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl TitleIndex {
    /// Builds the index from `(title, row_index)` pairs in the given order
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for (title, row) in pairs {
            index.insert(title.as_ref(), row);
        }
        index
    }

    /// Loads the title index artifact (an ordered array of `[title, row]` pairs)
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let pairs: Vec<(String, usize)> = read_json(path)?;
        Ok(Self::from_pairs(pairs))
    }

    fn insert(&mut self, title: &str, row: usize) {
        let key = normalize_title(title);
        match self.positions.get(&key) {
            Some(&position) => {
                tracing::debug!(title = %key, previous = self.entries[position].1, row, "Duplicate title, keeping later row");
                self.entries[position].1 = row;
            }
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, row));
            }
        }
    }

    /// Resolves a free-form title to a catalog row
    ///
    /// Tries an exact match on the normalized query first, then returns the
    /// first entry (in index order) whose title contains the query.
    pub fn resolve(&self, query: &str) -> Option<usize> {
        let query = normalize_title(query);

        if let Some(&position) = self.positions.get(&query) {
            return Some(self.entries[position].1);
        }

        self.entries
            .iter()
            .find(|(title, _)| title.contains(query.as_str()))
            .map(|&(_, row)| row)
    }

    /// Largest row referenced by the index, if any
    pub fn max_row(&self) -> Option<usize> {
        self.entries.iter().map(|&(_, row)| row).max()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
