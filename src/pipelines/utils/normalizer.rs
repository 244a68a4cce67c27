use crate::models::StopwordSet;

/// Turns raw review text into the tokens the lexicon method counts.
///
/// Normalization is deliberately lossy and ASCII-only:
/// 1. lowercase the whole text
/// 2. drop every character that is not `a-z` or whitespace
/// 3. split on whitespace
/// 4. drop stopwords
///
/// Whitespace here also covers the ASCII file, group, record and unit
/// separators (`U+001C..=U+001F`), which `char::is_whitespace` leaves out.
///
/// Digits, punctuation and accented letters disappear entirely, so
/// `"café"` becomes `"caf"` and `"don't"` becomes `"dont"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    stopwords: StopwordSet,
}

impl Normalizer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    /// A normalizer using the bundled English stopword list.
    pub fn english() -> Self {
        Self::new(StopwordSet::english())
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn normalize(&self, text: &str) -> Vec<String> {
        let filtered: String = text
            .to_lowercase()
            .chars()
            .filter(|&c| c.is_ascii_lowercase() || is_separator(c))
            .collect();

        filtered
            .split(is_separator)
            .filter(|token| !token.is_empty() && !self.stopwords.contains(token))
            .map(str::to_owned)
            .collect()
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
