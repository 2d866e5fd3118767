use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::{read_json, ArtifactError};

/// Metadata of the fitted text vectorizer that produced the feature matrix
///
/// Lookups never consult it; it is loaded so a mismatched artifact set fails
/// at startup instead of producing silently wrong rankings.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorizerInfo {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

impl VectorizerInfo {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let info: Self = read_json(path)?;

        if let Some((term, col)) = info.vocabulary.iter().find(|(_, col)| **col >= info.idf.len()) {
            return Err(ArtifactError::Inconsistent(format!(
                "vectorizer term {:?} maps to column {} but only {} idf weights exist",
                term,
                col,
                info.idf.len()
            )));
        }

        Ok(info)
    }

    /// Number of feature columns the vectorizer emits
    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }
}
