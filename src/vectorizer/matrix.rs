use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Square similarity matrix, row-major.
///
/// `get(i, j)` is the cosine similarity between document `i` and `j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimilarityMatrix {
    size: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Assemble from rows. Every row must be `rows.len()` long.
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            debug_assert_eq!(row.len(), size, "similarity row has the wrong length");
            data.extend(row);
        }
        SimilarityMatrix { size, data }
    }

    pub(crate) fn identity(size: usize) -> Self {
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            data[i * size + i] = 1.0;
        }
        SimilarityMatrix { size, data }
    }

    /// number of documents (rows == columns)
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.size || j >= self.size {
            return None;
        }
        Some(self.data[i * self.size + j])
    }

    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.size {
            return None;
        }
        Some(&self.data[i * self.size..(i + 1) * self.size])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunk size must be non-zero; an empty matrix has no data anyway
        self.data.chunks(self.size.max(1))
    }

    /// flat row-major view
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for SimilarityMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.size && j < self.size, "index ({}, {}) out of bounds for {}x{} matrix", i, j, self.size, self.size);
        &self.data[i * self.size + j]
    }
}

impl fmt::Display for SimilarityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|v| format!("{:.4}", v))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
