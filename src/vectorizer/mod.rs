pub mod config;
pub mod index;
pub mod matrix;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use std::marker::PhantomData;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    error::{Result, SimilarityError},
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        config::{DegeneratePolicy, SimilarityConfig},
        index::SimilarityIndex,
        matrix::SimilarityMatrix,
        tfidf::{DefaultTfIdfEngine, TfIdfEngine, TfIdfModel},
        token::tokenize,
        vocabulary::Vocabulary,
    },
};

/// All-pairs TF-IDF similarity engine.
///
/// `SimilarityEngine<E>` is generic over the weighting engine `E`.
/// The engine itself holds only settings; vocabulary, model and index are
/// built per call and dropped with the result, so one engine can serve
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct SimilarityEngine<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine,
{
    config: SimilarityConfig,
    _marker: PhantomData<E>,
}

impl<E> Default for SimilarityEngine<E>
where
    E: TfIdfEngine,
{
    fn default() -> Self {
        Self {
            config: SimilarityConfig::default(),
            _marker: PhantomData,
        }
    }
}

impl<E> SimilarityEngine<E>
where
    E: TfIdfEngine + Send + Sync,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimilarityConfig) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Tokenize the batch, build its vocabulary, fit the TF-IDF model and
    /// index every document.
    pub fn fit<S>(&self, texts: &[S]) -> FittedCorpus<E>
    where
        S: AsRef<str>,
    {
        let docs: Vec<Vec<String>> = texts.iter().map(|text| tokenize(text.as_ref())).collect();
        let vocab = Vocabulary::build(&docs);
        let model = TfIdfModel::<E>::fit_with_eps(&vocab, self.config.eps);
        let vectors: Vec<ZeroSpVec<f64>> = docs
            .iter()
            .map(|doc| model.transform(&vocab.doc2bow(doc)))
            .collect();
        let index = SimilarityIndex::build(&vectors, vocab.len());
        let zero_vectors = vectors.iter().filter(|v| v.nnz() == 0).count();
        debug!(
            documents = texts.len(),
            vocabulary = vocab.len(),
            tokens = vocab.num_pos(),
            zero_vectors,
            "fitted tf-idf corpus"
        );
        FittedCorpus {
            vocab,
            model,
            index,
            zero_vectors,
        }
    }

    /// Compute the N x N cosine similarity matrix of `texts`.
    ///
    /// The diagonal is always exactly 1.0. Documents whose TF-IDF vector is
    /// zero score 0.0 against every other document.
    ///
    /// # Errors
    /// `SimilarityError::DegenerateCorpus` when two or more documents are all
    /// zero vectors and the config asks for `DegeneratePolicy::Reject`.
    pub fn compute<S>(&self, texts: &[S]) -> Result<SimilarityMatrix>
    where
        S: AsRef<str> + Sync,
    {
        let n = texts.len();
        if n == 0 {
            return Ok(SimilarityMatrix::default());
        }

        let fitted = self.fit(texts);
        if n > 1 && fitted.is_degenerate() {
            match self.config.degenerate {
                DegeneratePolicy::Reject => {
                    return Err(SimilarityError::DegenerateCorpus { documents: n });
                }
                DegeneratePolicy::Fallback => {
                    warn!(documents = n, "all document vectors are zero, returning identity matrix");
                    return Ok(SimilarityMatrix::identity(n));
                }
            }
        }

        let row = |(i, text): (usize, &S)| -> Vec<f64> {
            let mut row = fitted.similarities(text.as_ref());
            row[i] = 1.0;
            row
        };
        let rows: Vec<Vec<f64>> = if self.config.parallel {
            texts.par_iter().enumerate().map(row).collect()
        } else {
            texts.iter().enumerate().map(row).collect()
        };
        Ok(SimilarityMatrix::from_rows(rows))
    }
}

/// Vocabulary, TF-IDF model and similarity index of one batch.
#[derive(Debug, Clone)]
pub struct FittedCorpus<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine,
{
    vocab: Vocabulary,
    model: TfIdfModel<E>,
    index: SimilarityIndex,
    zero_vectors: usize,
}

impl<E> FittedCorpus<E>
where
    E: TfIdfEngine,
{
    /// TF-IDF vector of `text` under this corpus' vocabulary and model.
    pub fn vectorize(&self, text: &str) -> ZeroSpVec<f64> {
        self.model.transform(&self.vocab.doc2bow(tokenize(text)))
    }

    /// Cosine similarity of `text` against every indexed document.
    pub fn similarities(&self, text: &str) -> Vec<f64> {
        self.index.query(&self.vectorize(text))
    }

    /// The `k` indexed documents most similar to `text`, best first.
    pub fn most_similar(&self, text: &str, k: usize) -> Vec<(usize, f64)> {
        self.index.query_top(&self.vectorize(text), k)
    }

    /// true when every indexed document vector is zero
    pub fn is_degenerate(&self) -> bool {
        self.zero_vectors == self.index.num_docs()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn model(&self) -> &TfIdfModel<E> {
        &self.model
    }

    pub fn num_docs(&self) -> usize {
        self.index.num_docs()
    }
}
