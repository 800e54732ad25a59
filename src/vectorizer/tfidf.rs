use std::marker::PhantomData;

use crate::{utils::math::vector::ZeroSpVec, vectorizer::vocabulary::Vocabulary};

/// Weights below this magnitude are dropped after normalization.
pub const DEFAULT_EPS: f64 = 1e-12;

/// TF-IDF weighting strategy.
///
/// Implement this trait to plug a different local (TF) or global (IDF)
/// weighting into `TfIdfModel<E>` and `SimilarityEngine<E>`.
pub trait TfIdfEngine {
    /// local weight of a token that occurs `count` times in a document
    fn tf(count: u32) -> f64;
    /// global weight of a token found in `doc_freq` of `doc_num` documents
    fn idf(doc_num: u64, doc_freq: u64) -> f64;
}

/// Default engine
/// raw count TF, `log2(N / df)` IDF.
///
/// A token present in every document gets weight 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfIdfEngine;

impl TfIdfEngine for DefaultTfIdfEngine {
    #[inline]
    fn tf(count: u32) -> f64 {
        count as f64
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        if doc_freq == 0 {
            return 0.0;
        }
        (doc_num as f64 / doc_freq as f64).log2()
    }
}

/// Sublinear engine
/// `1 + ln(count)` TF, smoothed `ln((1 + N) / (1 + df)) + 1` IDF.
///
/// IDF never reaches 0, so documents made of shared tokens still get
/// non-zero vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SublinearTfIdfEngine;

impl TfIdfEngine for SublinearTfIdfEngine {
    #[inline]
    fn tf(count: u32) -> f64 {
        if count == 0 {
            return 0.0;
        }
        1.0 + (count as f64).ln()
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

/// Fitted TF-IDF model.
///
/// Holds one IDF weight per vocabulary ID and turns raw count vectors into
/// L2-normalized TF-IDF vectors.
#[derive(Debug, Clone)]
pub struct TfIdfModel<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine,
{
    idf_vec: Vec<f64>,
    doc_num: u64,
    eps: f64,
    _marker: PhantomData<E>,
}

impl<E> TfIdfModel<E>
where
    E: TfIdfEngine,
{
    /// Fit IDF weights from the vocabulary's document frequencies.
    pub fn fit(vocab: &Vocabulary) -> Self {
        Self::fit_with_eps(vocab, DEFAULT_EPS)
    }

    pub fn fit_with_eps(vocab: &Vocabulary, eps: f64) -> Self {
        let doc_num = vocab.num_docs();
        let idf_vec = vocab
            .doc_freqs()
            .iter()
            .map(|&df| E::idf(doc_num, df))
            .collect();
        TfIdfModel {
            idf_vec,
            doc_num,
            eps,
            _marker: PhantomData,
        }
    }

    /// Weight a bag-of-words vector and scale it to unit length.
    ///
    /// Entries whose weight ends up below `eps` are removed. A vector with no
    /// remaining weight comes back empty (zero norm).
    pub fn transform(&self, bow: &ZeroSpVec<u32>) -> ZeroSpVec<f64> {
        let mut vec = bow.map_values(|id, count| {
            let idf = self.idf_vec.get(id).copied().unwrap_or(0.0);
            E::tf(count) * idf
        });
        vec.l2_normalize();
        let eps = self.eps;
        vec.retain(|_, w| w.abs() > eps);
        vec
    }

    #[inline]
    pub fn idf(&self, id: usize) -> Option<f64> {
        self.idf_vec.get(id).copied()
    }

    #[inline]
    pub fn idf_vec(&self) -> &[f64] {
        &self.idf_vec
    }

    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// number of features (vocabulary size at fit time)
    #[inline]
    pub fn num_features(&self) -> usize {
        self.idf_vec.len()
    }
}
