//! Rule-based polarity engine.
//!
//! Scores text by averaging the polarity and subjectivity of known opinion
//! words. A preceding intensifier ("very good") scales a word's scores, and
//! a negation within the two previous tokens ("not very good") flips the
//! polarity and halves it.
//!
//! ```
//! use sentiment_analyzer::models::implementations::PatternPolarityEngine;
//!
//! let engine = PatternPolarityEngine::new();
//! let score = engine.score("The battery life is excellent");
//! assert!(score.polarity > 0.5);
//! assert!(engine.score("not good at all").polarity < 0.0);
//! ```

use crate::pipelines::{PolarityEngine, PolarityScore};
use std::collections::{HashMap, HashSet};

/// `(word, polarity, subjectivity)`
const SCORED_WORDS: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("best", 1.0, 0.3),
    ("perfect", 1.0, 1.0),
    ("happy", 0.8, 1.0),
    ("nice", 0.6, 1.0),
    ("awesome", 1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("beautiful", 0.85, 1.0),
    ("easy", 0.43, 0.83),
    ("fast", 0.2, 0.6),
    ("reliable", 0.5, 0.5),
    ("comfortable", 0.4, 0.7),
    ("cheap", 0.4, 0.7),
    ("fine", 0.42, 0.5),
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("hate", -0.8, 0.9),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("useless", -0.5, 0.0),
    ("waste", -0.2, 0.1),
    ("poor", -0.4, 0.6),
    ("boring", -1.0, 1.0),
    ("slow", -0.3, 0.4),
    ("broken", -0.4, 0.4),
    ("expensive", -0.5, 0.7),
    ("ugly", -0.7, 1.0),
    ("annoying", -0.8, 0.9),
    ("mediocre", -0.5, 0.6),
    ("wrong", -0.5, 0.9),
    ("difficult", -0.5, 1.0),
    ("sad", -0.5, 1.0),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("absolutely", 1.4),
    ("super", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("quite", 1.1),
    ("fairly", 0.8),
    ("somewhat", 0.7),
    ("slightly", 0.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nothing", "hardly", "barely", "cannot",
    "can't", "cant", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't",
    "isnt", "wasn't", "wasnt", "aren't", "arent", "won't", "wont",
];

const NEGATION_FACTOR: f64 = -0.5;

/// How many tokens back a negation still applies.
const NEGATION_WINDOW: usize = 2;

#[derive(Debug, Clone)]
pub struct PatternPolarityEngine {
    words: HashMap<String, (f64, f64)>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for PatternPolarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternPolarityEngine {
    pub fn new() -> Self {
        Self {
            words: SCORED_WORDS
                .iter()
                .map(|&(w, p, s)| (w.to_string(), (p, s)))
                .collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|&(w, m)| (w.to_string(), m))
                .collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Adds or replaces a scored word. Scores are clamped into range.
    pub fn with_word(mut self, word: impl AsRef<str>, polarity: f64, subjectivity: f64) -> Self {
        self.words.insert(
            word.as_ref().to_lowercase(),
            (polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)),
        );
        self
    }

    pub fn score(&self, text: &str) -> PolarityScore {
        let tokens = tokenize(text);
        let mut matched = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&(mut polarity, mut subjectivity)) = self.words.get(token) else {
                continue;
            };

            if let Some(multiplier) = i
                .checked_sub(1)
                .and_then(|prev| self.intensifiers.get(&tokens[prev]))
            {
                polarity *= multiplier;
                subjectivity *= multiplier;
            }

            let negated = (1..=NEGATION_WINDOW)
                .filter_map(|k| i.checked_sub(k))
                .any(|j| self.negations.contains(&tokens[j]));
            if negated {
                polarity *= NEGATION_FACTOR;
            }

            matched.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
        }

        if matched.is_empty() {
            return PolarityScore::new(0.0, 0.0);
        }

        let n = matched.len() as f64;
        let (p_sum, s_sum) = matched
            .iter()
            .fold((0.0, 0.0), |(p, s), &(mp, ms)| (p + mp, s + ms));
        PolarityScore::new((p_sum / n).clamp(-1.0, 1.0), (s_sum / n).clamp(0.0, 1.0))
    }
}

impl PolarityEngine for PatternPolarityEngine {
    fn analyze(&self, text: &str) -> anyhow::Result<PolarityScore> {
        Ok(self.score(text))
    }
}

/// Lowercase words; apostrophes inside a word are kept so contractions
/// like "isn't" stay intact.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('\u{2019}', "'")
        .split(|c: char| !(c.is_alphabetic() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PatternPolarityEngine {
        PatternPolarityEngine::new()
    }

    #[test]
    fn unknown_words_score_zero() {
        let score = engine().score("The package arrived on Tuesday.");
        assert_eq!(score, PolarityScore::new(0.0, 0.0));
        assert_eq!(engine().score(""), PolarityScore::new(0.0, 0.0));
    }

    #[test]
    fn averages_matched_words() {
        let score = engine().score("good but slow");
        assert!((score.polarity - 0.2).abs() < 1e-9);
        assert!((score.subjectivity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn intensifier_strengthens_and_clamps() {
        let plain = engine().score("good").polarity;
        let boosted = engine().score("very good").polarity;
        assert!(boosted > plain);
        assert_eq!(engine().score("extremely excellent").polarity, 1.0);
        assert_eq!(engine().score("extremely excellent").subjectivity, 1.0);
    }

    #[test]
    fn negation_flips_and_dampens() {
        let score = engine().score("This is not good");
        assert!((score.polarity + 0.35).abs() < 1e-9);
        let score = engine().score("I don't hate it");
        assert!((score.polarity - 0.4).abs() < 1e-9);
        let score = engine().score("not very good");
        assert!(score.polarity < 0.0);
    }

    #[test]
    fn curly_apostrophes_are_understood() {
        let score = engine().score("It isn\u{2019}t bad");
        assert!(score.polarity > 0.0);
    }

    #[test]
    fn custom_words_extend_the_table() {
        let engine = engine().with_word("Superb", 3.0, -1.0);
        assert_eq!(engine.score("superb"), PolarityScore::new(1.0, 0.0));
    }

    #[test]
    fn implements_polarity_engine() -> anyhow::Result<()> {
        let score = engine().analyze("What a wonderful day")?;
        assert_eq!(score, PolarityScore::new(1.0, 1.0));
        Ok(())
    }
}
