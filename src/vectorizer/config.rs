use serde::{Deserialize, Serialize};

use crate::vectorizer::tfidf::DEFAULT_EPS;

/// What to do when every document vector of the corpus has zero norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// return the identity matrix (self-similarity 1.0, everything else 0.0)
    #[default]
    Fallback,
    /// return `SimilarityError::DegenerateCorpus`
    Reject,
}

/// Engine settings.
///
/// Missing fields take their default when deserialized, so hosts can
/// embed this in their own config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// compute rows on the rayon thread pool
    pub parallel: bool,
    /// TF-IDF weights below this are dropped
    pub eps: f64,
    pub degenerate: DegeneratePolicy,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            eps: DEFAULT_EPS,
            degenerate: DegeneratePolicy::Fallback,
        }
    }
}

impl SimilarityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    pub fn degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let cfg = SimilarityConfig::new()
            .parallel(true)
            .eps(1e-9)
            .degenerate(DegeneratePolicy::Reject);
        assert!(cfg.parallel);
        assert_eq!(cfg.eps, 1e-9);
        assert_eq!(cfg.degenerate, DegeneratePolicy::Reject);
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let cfg: SimilarityConfig = serde_json::from_str(r#"{"degenerate":"reject"}"#).unwrap();
        assert!(!cfg.parallel);
        assert_eq!(cfg.eps, DEFAULT_EPS);
        assert_eq!(cfg.degenerate, DegeneratePolicy::Reject);

        let cfg: SimilarityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SimilarityConfig::default());
    }
}
