use std::cmp::Ordering;

use crate::utils::math::vector::ZeroSpVec;

/// Dense cosine-similarity index.
///
/// Stores every document vector as one row of a row-major
/// `num_docs x num_features` matrix, each row scaled to unit length.
/// A query is a sparse vector; its similarity to every stored document is
/// returned in insertion order.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    matrix: Vec<f64>,
    num_docs: usize,
    num_features: usize,
}

impl SimilarityIndex {
    /// Build the index from document vectors.
    /// Zero vectors are stored as zero rows.
    pub fn build(vectors: &[ZeroSpVec<f64>], num_features: usize) -> Self {
        let num_docs = vectors.len();
        let mut matrix = vec![0.0; num_docs * num_features];
        for (row, vec) in matrix.chunks_mut(num_features.max(1)).zip(vectors) {
            let norm = vec.norm_sq::<f64>().sqrt();
            if norm == 0.0 {
                continue;
            }
            for (idx, val) in vec.raw_iter() {
                if idx < num_features {
                    row[idx] = val / norm;
                }
            }
        }
        SimilarityIndex {
            matrix,
            num_docs,
            num_features,
        }
    }

    /// Cosine similarity of `query` against every stored document.
    ///
    /// A zero query scores 0.0 everywhere. Query indices outside the
    /// feature range are ignored.
    pub fn query(&self, query: &ZeroSpVec<f64>) -> Vec<f64> {
        let mut scores = vec![0.0; self.num_docs];
        let norm = query.norm_sq::<f64>().sqrt();
        if norm == 0.0 || self.num_features == 0 {
            return scores;
        }
        for (doc, score) in scores.iter_mut().enumerate() {
            let row = self.row(doc);
            let mut dot = 0.0;
            for (idx, val) in query.raw_iter() {
                if let Some(w) = row.get(idx) {
                    dot += w * val;
                }
            }
            *score = dot / norm;
        }
        scores
    }

    /// The `k` best matches for `query`, highest score first.
    /// Equal scores keep ascending document order.
    pub fn query_top(&self, query: &ZeroSpVec<f64>, k: usize) -> Vec<(usize, f64)> {
        if k == 0 {
            return Vec::new();
        }
        let mut hits: Vec<(usize, f64)> = self.query(query).into_iter().enumerate().collect();
        hits.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        hits.truncate(k);
        hits
    }

    #[inline]
    fn row(&self, doc: usize) -> &[f64] {
        let start = doc * self.num_features;
        &self.matrix[start..start + self.num_features]
    }

    #[inline]
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    #[inline]
    pub fn num_features(&self) -> usize {
        self.num_features
    }
}
