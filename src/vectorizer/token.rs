use indexmap::IndexMap;

/// Normalize raw text into tokens.
///
/// Lowercases, deletes every `,` and `.` (adjacent characters merge, so
/// `"U.S."` becomes `"us"`), then splits on whitespace. Empty input
/// gives an empty token list.
///
/// # Examples
/// ```
/// use tfidf_similarity::tokenize;
/// assert_eq!(tokenize("hi. I am, a, sentence."), vec!["hi", "i", "am", "a", "sentence"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| *c != ',' && *c != '.')
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// TokenFrequency
/// Counts how often each token occurs within one document.
///
/// Tokens keep their first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFrequency {
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// add one token
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        match self.token_count.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.token_count.insert(token.to_owned(), 1);
            }
        }
        self.total_token_count += 1;
        self
    }

    /// add every token of the slice
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where T: AsRef<str>
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// total number of tokens added, duplicates included
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.token_count.iter().map(|(token, count)| (token.as_str(), *count))
    }
}

impl<T: AsRef<str>> FromIterator<T> for TokenFrequency {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut freq = TokenFrequency::new();
        for token in iter {
            freq.add_token(token.as_ref());
        }
        freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_strips_periods_and_commas() {
        assert_eq!(
            tokenize("hi. I am, a, sentence."),
            vec!["hi", "i", "am", "a", "sentence"]
        );
    }

    #[test]
    fn tokenize_merges_around_deleted_punctuation() {
        assert_eq!(tokenize("The U.S. economy"), vec!["the", "us", "economy"]);
        assert_eq!(tokenize("1,000.5 units"), vec!["10005", "units"]);
    }

    #[test]
    fn tokenize_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ").is_empty());
        assert!(tokenize(" . , ").is_empty());
    }

    #[test]
    fn tokenize_collapses_runs_of_whitespace() {
        assert_eq!(tokenize("  Apple\t\tBANANA \n cherry "), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn tokenize_keeps_other_punctuation() {
        assert_eq!(tokenize("wait! what?"), vec!["wait!", "what?"]);
    }

    #[test]
    fn token_frequency_counts() {
        let freq: TokenFrequency = tokenize("a b a c a").into_iter().collect();
        assert_eq!(freq.token_count("a"), 3);
        assert_eq!(freq.token_count("b"), 1);
        assert_eq!(freq.token_count("z"), 0);
        assert_eq!(freq.token_sum(), 5);
        assert_eq!(freq.token_num(), 3);
        let order: Vec<&str> = freq.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }
}
