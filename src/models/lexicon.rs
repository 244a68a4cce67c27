//! Positive and negative word lists for the lexicon scoring method.

use crate::core::SentimentError;
use std::collections::HashSet;

pub const DEFAULT_POSITIVE_TERMS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love", "best",
    "perfect", "happy",
];

pub const DEFAULT_NEGATIVE_TERMS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst", "hate", "disappointing", "useless",
    "waste", "poor",
];

/// Two fixed word sets. A word listed in both sets counts toward both tallies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            positive: DEFAULT_POSITIVE_TERMS.iter().map(|w| w.to_string()).collect(),
            negative: DEFAULT_NEGATIVE_TERMS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Lexicon {
    /// Builds a lexicon, lowercasing every term.
    ///
    /// Terms must consist only of `a-z` once lowercased, otherwise they could
    /// never match a normalized token.
    pub fn new<P, N, S>(positive: P, negative: N) -> Result<Self, SentimentError>
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            positive: validate_terms(positive)?,
            negative: validate_terms(negative)?,
        })
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    /// Returns `(positive, negative)` hit counts over a token sequence.
    pub fn count_matches<S: AsRef<str>>(&self, tokens: &[S]) -> (usize, usize) {
        tokens.iter().fold((0, 0), |(p, n), token| {
            let token = token.as_ref();
            (
                p + usize::from(self.is_positive(token)),
                n + usize::from(self.is_negative(token)),
            )
        })
    }

    /// Terms present in both sets, sorted.
    pub fn overlap(&self) -> Vec<&str> {
        let mut shared: Vec<&str> = self
            .positive
            .intersection(&self.negative)
            .map(String::as_str)
            .collect();
        shared.sort_unstable();
        shared
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

fn validate_terms<I, S>(terms: I) -> Result<HashSet<String>, SentimentError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .map(|term| {
            let lowered = term.as_ref().trim().to_lowercase();
            if lowered.is_empty() || !lowered.chars().all(|c| c.is_ascii_lowercase()) {
                Err(SentimentError::InvalidTerm {
                    term: term.as_ref().to_string(),
                })
            } else {
                Ok(lowered)
            }
        })
        .collect()
}
