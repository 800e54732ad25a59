use indexmap::IndexSet;

use crate::{utils::math::vector::ZeroSpVec, vectorizer::token::TokenFrequency};

/// Token dictionary for one batch of documents.
///
/// Every distinct token gets a dense ID in order of first appearance.
/// Alongside the ID mapping it records corpus statistics:
/// - number of documents containing each token (document frequency)
/// - number of documents processed
/// - total tokens processed and total bag-of-words entries
///
/// A vocabulary is built once from the full batch and never grows afterwards.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// token -> id, id == insertion index
    tokens: IndexSet<Box<str>>,
    /// document frequency per id
    doc_freqs: Vec<u64>,
    num_docs: u64,
    num_pos: u64,
    num_nnz: u64,
}

impl Vocabulary {
    /// Build the vocabulary from every tokenized document of the batch.
    pub fn build<I, D, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut vocab = Vocabulary::default();
        for doc in documents {
            vocab.add_document(doc);
        }
        vocab
    }

    fn add_document<D, T>(&mut self, doc: D)
    where
        D: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let freq = TokenFrequency::from_iter(doc);
        for (token, _) in freq.iter() {
            let (id, inserted) = self.tokens.insert_full(Box::from(token));
            if inserted {
                self.doc_freqs.push(0);
            }
            self.doc_freqs[id] += 1;
        }
        self.num_docs += 1;
        self.num_pos += freq.token_sum();
        self.num_nnz += freq.token_num() as u64;
    }

    /// Convert a tokenized document into a sparse `id -> count` vector.
    /// Tokens the vocabulary has never seen are ignored.
    pub fn doc2bow<D, T>(&self, doc: D) -> ZeroSpVec<u32>
    where
        D: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let freq = TokenFrequency::from_iter(doc);
        let pairs = freq
            .iter()
            .filter_map(|(token, count)| self.token_id(token).map(|id| (id, count)))
            .collect();
        ZeroSpVec::from_pairs(self.len(), pairs)
    }

    #[inline]
    pub fn token_id(&self, token: &str) -> Option<usize> {
        self.tokens.get_index_of(token)
    }

    #[inline]
    pub fn token(&self, id: usize) -> Option<&str> {
        self.tokens.get_index(id).map(|t| t.as_ref())
    }

    /// number of documents containing the token with this id
    #[inline]
    pub fn doc_freq(&self, id: usize) -> u64 {
        self.doc_freqs.get(id).copied().unwrap_or(0)
    }

    #[inline]
    pub fn doc_freqs(&self) -> &[u64] {
        &self.doc_freqs
    }

    #[inline]
    pub fn num_docs(&self) -> u64 {
        self.num_docs
    }

    /// total number of tokens processed
    #[inline]
    pub fn num_pos(&self) -> u64 {
        self.num_pos
    }

    /// total number of non-zero bag-of-words entries
    #[inline]
    pub fn num_nnz(&self) -> u64 {
        self.num_nnz
    }

    /// vocabulary size
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.tokens.iter().enumerate().map(|(id, t)| (id, t.as_ref()))
    }
}
