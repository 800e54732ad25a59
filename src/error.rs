use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// Every document vector has zero norm, so no similarity can be defined.
    /// Only raised under `DegeneratePolicy::Reject`.
    #[error("Degenerate corpus: all {documents} document vectors have zero norm")]
    DegenerateCorpus { documents: usize },
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
