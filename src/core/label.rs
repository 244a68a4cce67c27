use serde::Serialize;
use std::fmt;

/// Polarity above which the advanced method reports a positive review.
pub const POSITIVE_POLARITY_THRESHOLD: f64 = 0.1;

/// Polarity at or below which the advanced method reports a negative review.
pub const NEGATIVE_POLARITY_THRESHOLD: f64 = -0.1;

/// Confidence reported by the lexicon method whenever it lands on a tie.
pub const NEUTRAL_CONFIDENCE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Display order used by charts and summaries.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Majority vote between positive and negative lexicon hits.
    pub fn from_counts(positive: usize, negative: usize) -> Self {
        if positive > negative {
            SentimentLabel::Positive
        } else if negative > positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Maps an engine polarity onto a label.
    ///
    /// The neutral band is asymmetric: `0.1` itself is neutral while `-0.1`
    /// is already negative.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_POLARITY_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity <= NEGATIVE_POLARITY_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
