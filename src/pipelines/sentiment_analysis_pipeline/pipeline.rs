use super::model::PolarityEngine;
use crate::core::label::NEUTRAL_CONFIDENCE;
use crate::core::{SentimentError, SentimentLabel};
use crate::models::Lexicon;
use crate::pipelines::utils::Normalizer;
use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Result of the lexicon word-count method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimpleSentimentResult {
    pub label: SentimentLabel,
    /// Percentage in `[0, 100]`.
    pub confidence: f64,
    pub positive_count: usize,
    pub negative_count: usize,
}

/// Result of the polarity-engine method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdvancedSentimentResult {
    pub label: SentimentLabel,
    pub polarity: f64,
    /// Percentage in `[0, 100]`.
    pub confidence: f64,
    pub subjectivity: f64,
}

/// Reviews longer than this many characters are shortened for display.
pub const REVIEW_DISPLAY_CHARS: usize = 50;

pub const TRUNCATION_MARKER: &str = "...";

/// Shortens `review` to [`REVIEW_DISPLAY_CHARS`] characters plus
/// [`TRUNCATION_MARKER`]. Shorter reviews are returned unchanged.
pub fn truncate_review(review: &str) -> String {
    match review.char_indices().nth(REVIEW_DISPLAY_CHARS) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &review[..cut]),
        None => review.to_string(),
    }
}

/// One review scored by both methods, as shown in the batch results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRow {
    pub review: String,
    pub simple_label: SentimentLabel,
    pub advanced_label: SentimentLabel,
    pub polarity: f64,
}

pub struct SentimentAnalysisPipeline<E: PolarityEngine> {
    pub(crate) normalizer: Normalizer,
    pub(crate) lexicon: Lexicon,
    pub(crate) engine: E,
}

impl<E: PolarityEngine> SentimentAnalysisPipeline<E> {
    /// Lowercased, ASCII-only, stopword-free tokens of `text`.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.normalizer.normalize(text)
    }

    /// Classifies `text` by counting positive and negative lexicon hits.
    ///
    /// Confidence is `hits / (positive + negative + 1) * 100` for the winning
    /// side. A tie, including no hits at all, is neutral with a fixed
    /// confidence of 50.
    pub fn score_simple(&self, text: &str) -> SimpleSentimentResult {
        let tokens = self.normalizer.normalize(text);
        let (positive_count, negative_count) = self.lexicon.count_matches(&tokens);
        let label = SentimentLabel::from_counts(positive_count, negative_count);

        let total = positive_count + negative_count + 1;
        let damped = |hits: usize| hits as f64 / total as f64 * 100.0;
        let confidence = match label {
            SentimentLabel::Positive => damped(positive_count),
            SentimentLabel::Negative => damped(negative_count),
            SentimentLabel::Neutral => NEUTRAL_CONFIDENCE,
        };

        debug!(
            tokens = tokens.len(),
            positive_count, negative_count, %label, confidence, "lexicon score"
        );

        SimpleSentimentResult {
            label,
            confidence,
            positive_count,
            negative_count,
        }
    }

    /// Classifies `text` from the polarity reported by the engine.
    ///
    /// Polarity above `0.1` is positive, `-0.1` and below is negative, and
    /// everything in between is neutral. Confidence is `|polarity| * 100`,
    /// capped at 100.
    pub fn score_advanced(&self, text: &str) -> anyhow::Result<AdvancedSentimentResult> {
        let score = self
            .engine
            .analyze(text)
            .context("polarity engine failed to score text")?;

        if !score.polarity.is_finite() || !score.subjectivity.is_finite() {
            return Err(SentimentError::InvalidScore {
                polarity: score.polarity,
                subjectivity: score.subjectivity,
            }
            .into());
        }
        if !(-1.0..=1.0).contains(&score.polarity) {
            warn!(polarity = score.polarity, "polarity engine returned a score outside [-1, 1]");
        }

        let label = SentimentLabel::from_polarity(score.polarity);
        let confidence = (score.polarity.abs() * 100.0).min(100.0);

        debug!(
            polarity = score.polarity,
            subjectivity = score.subjectivity,
            %label,
            "polarity score"
        );

        Ok(AdvancedSentimentResult {
            label,
            polarity: score.polarity,
            confidence,
            subjectivity: score.subjectivity,
        })
    }

    /// Scores every review with both methods, one row per review in input order.
    pub fn score_batch<S: AsRef<str>>(&self, reviews: &[S]) -> anyhow::Result<Vec<ReviewRow>> {
        let rows = reviews
            .iter()
            .enumerate()
            .map(|(index, review)| -> anyhow::Result<ReviewRow> {
                let review = review.as_ref();
                let simple = self.score_simple(review);
                let advanced = self
                    .score_advanced(review)
                    .with_context(|| format!("failed to score review #{index}"))?;
                Ok(ReviewRow {
                    review: truncate_review(review),
                    simple_label: simple.label,
                    advanced_label: advanced.label,
                    polarity: advanced.polarity,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        info!(reviews = rows.len(), "scored review batch");
        Ok(rows)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
