use nalgebra_sparse::csr::CsrRow;
use nalgebra_sparse::CsrMatrix;
use serde::Deserialize;
use std::path::Path;

use super::{read_json, ArtifactError};

/// Feature matrix as stored on disk, in compressed sparse row layout
#[derive(Debug, Deserialize)]
pub struct SerializedCsr {
    pub rows: usize,
    pub cols: usize,
    pub indptr: Vec<usize>,
    pub indices: Vec<usize>,
    pub data: Vec<f64>,
}

/// Immutable sparse feature matrix with precomputed row norms
///
/// Row `i` holds the text features of catalog row `i`.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    matrix: CsrMatrix<f64>,
    norms: Vec<f64>,
}

impl SimilarityIndex {
    /// Validates a serialized CSR matrix and builds the index from it
    ///
    /// Column indices must be sorted and unique within each row, and every
    /// value and row norm must be finite.
    pub fn from_csr(serialized: SerializedCsr) -> Result<Self, ArtifactError> {
        if let Some(value) = serialized.data.iter().find(|v| !v.is_finite()) {
            return Err(ArtifactError::Inconsistent(format!(
                "feature matrix contains non-finite value {}",
                value
            )));
        }

        let matrix = CsrMatrix::try_from_csr_data(
            serialized.rows,
            serialized.cols,
            serialized.indptr,
            serialized.indices,
            serialized.data,
        )
        .map_err(|e| ArtifactError::Inconsistent(format!("malformed feature matrix: {}", e)))?;

        let norms: Vec<f64> = matrix
            .row_iter()
            .map(|row| row.values().iter().map(|v| v * v).sum::<f64>().sqrt())
            .collect();

        if let Some(row) = norms.iter().position(|n| !n.is_finite()) {
            return Err(ArtifactError::Inconsistent(format!(
                "feature matrix row {} has a non-finite norm",
                row
            )));
        }

        Ok(Self { matrix, norms })
    }

    /// Builds an index from dense rows, dropping zero entries
    pub fn from_dense(rows: &[Vec<f64>]) -> Result<Self, ArtifactError> {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut indptr = Vec::with_capacity(rows.len() + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();

        indptr.push(0);
        for row in rows {
            for (col, &value) in row.iter().enumerate() {
                if value != 0.0 {
                    indices.push(col);
                    data.push(value);
                }
            }
            indptr.push(data.len());
        }

        Self::from_csr(SerializedCsr {
            rows: rows.len(),
            cols,
            indptr,
            indices,
            data,
        })
    }

    /// Loads the feature matrix artifact
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let serialized: SerializedCsr = read_json(path)?;
        Self::from_csr(serialized)
    }

    /// Number of rows (movies)
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.nrows() == 0
    }

    /// Number of feature columns
    pub fn dimensions(&self) -> usize {
        self.matrix.ncols()
    }

    /// Returns the feature vector of `row`. Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> CsrRow<'_, f64> {
        self.matrix.row(row)
    }

    pub fn norm(&self, row: usize) -> f64 {
        self.norms[row]
    }

    /// Cosine similarity of `row` against every row, in row order
    ///
    /// Rows with a zero norm score 0.0.
    pub fn cosine_scores(&self, row: usize) -> Vec<f64> {
        let query_norm = self.norm(row);
        let mut dense = vec![0.0f64; self.dimensions()];
        let query = self.row(row);
        for (&col, &value) in query.col_indices().iter().zip(query.values()) {
            dense[col] = value;
        }

        self.matrix
            .row_iter()
            .zip(&self.norms)
            .map(|(other, &other_norm)| {
                if query_norm == 0.0 || other_norm == 0.0 {
                    return 0.0;
                }
                let dot: f64 = other
                    .col_indices()
                    .iter()
                    .zip(other.values())
                    .map(|(&col, &value)| dense[col] * value)
                    .sum();
                dot / (query_norm * other_norm)
            })
            .collect()
    }
}
