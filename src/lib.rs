/// This crate computes all-pairs cosine similarity of documents using
/// TF-IDF weighted sparse vectors.
pub mod vectorizer;
pub mod utils;
pub mod error;

/// Compute the cosine similarity matrix of `texts`
/// The single entry point of this crate.
/// `result[(i, j)]` is the cosine similarity between `texts[i]` and `texts[j]`
/// under TF-IDF weights fitted on the whole batch.
///
/// - The diagonal is exactly 1.0.
/// - An empty list gives a 0x0 matrix, a single text gives `[[1.0]]`.
/// - Texts with no weighted tokens (empty, or only tokens found in every text)
///   score 0.0 against the others.
///
/// Uses `DefaultTfIdfEngine` and the default `SimilarityConfig`.
/// Use `SimilarityEngine` for other weightings or settings.
///
/// # Examples
/// ```
/// use tfidf_similarity::compute_similarity_matrix;
/// let m = compute_similarity_matrix(&["apple banana", "cherry date"]);
/// assert_eq!(m.into_rows(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
/// ```
pub fn compute_similarity_matrix<S>(texts: &[S]) -> SimilarityMatrix
where
    S: AsRef<str> + Sync,
{
    let engine: SimilarityEngine = SimilarityEngine::new();
    match engine.compute(texts) {
        Ok(matrix) => matrix,
        // unreachable under the default fallback policy
        Err(SimilarityError::DegenerateCorpus { documents }) => SimilarityMatrix::identity(documents),
    }
}

/// Similarity Engine
/// The configurable form of `compute_similarity_matrix`.
///
/// `SimilarityEngine<E>` has one generic parameter:
/// - `E`: TF-IDF weighting engine (e.g., DefaultTfIdfEngine, SublinearTfIdfEngine)
///
/// The engine only stores its `SimilarityConfig`. Each call builds and drops
/// its own vocabulary, model and index, so there is no state shared between
/// calls.
pub use vectorizer::SimilarityEngine;

/// Fitted Corpus
/// Vocabulary, TF-IDF model and dense similarity index of one batch,
/// returned by `SimilarityEngine::fit`.
/// Supports querying arbitrary text against the batch and top-k lookup.
pub use vectorizer::FittedCorpus;

/// Similarity Matrix
/// Square, row-major `f64` matrix with exact 1.0 on the diagonal.
///
/// # Serialization
/// Supported.
pub use vectorizer::matrix::SimilarityMatrix;

/// Engine configuration
/// - `parallel`: compute rows with rayon
/// - `eps`: weight pruning threshold
/// - `degenerate`: what to do when every document vector is zero
///
/// # Serialization
/// Supported, missing fields fall back to defaults.
pub use vectorizer::config::{DegeneratePolicy, SimilarityConfig};

/// TF IDF Calculation Engine Trait
/// Defines the local (TF) and global (IDF) weights.
///
/// Provided engines:
/// - `DefaultTfIdfEngine`: raw count × log2(N / df)
/// - `SublinearTfIdfEngine`: (1 + ln count) × smoothed idf
pub use vectorizer::tfidf::{DefaultTfIdfEngine, SublinearTfIdfEngine, TfIdfEngine, TfIdfModel};

/// Vocabulary
/// Token <-> dense ID mapping for one batch, with document frequencies.
pub use vectorizer::vocabulary::Vocabulary;

/// Tokenizer
/// Lowercase, delete `.` and `,`, split on whitespace.
pub use vectorizer::token::{tokenize, TokenFrequency};

/// Dense cosine-similarity index over TF-IDF vectors.
pub use vectorizer::index::SimilarityIndex;

/// Sparse vector holding only non-zero elements, sorted by index.
pub use utils::math::vector::ZeroSpVec;

pub use error::{Result, SimilarityError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_properties() {
        let empty: [&str; 0] = [];
        assert!(compute_similarity_matrix(&empty).is_empty());
        assert_eq!(compute_similarity_matrix(&["any text"]).into_rows(), vec![vec![1.0]]);

        let m = compute_similarity_matrix(&["", "apple"]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 0.0);

        let m = compute_similarity_matrix(&["apple banana", "apple banana"]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(0, 1)], 0.0);
    }

    #[test]
    fn accepts_owned_strings() {
        let texts = vec![
            "The cat sat.".to_string(),
            "the CAT, sat".to_string(),
            "a dog barked".to_string(),
        ];
        let m = compute_similarity_matrix(&texts);
        assert_eq!(m.len(), 3);
        // first two normalize to identical token lists
        assert!((m[(0, 1)] - 1.0).abs() < 1e-9);
        assert_eq!(m[(0, 2)], 0.0);
    }
}
