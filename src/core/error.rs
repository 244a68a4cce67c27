use thiserror::Error;

/// Errors raised by the sentiment pipeline itself.
///
/// Failures coming from a [`PolarityEngine`](crate::pipelines::PolarityEngine)
/// are passed through as `anyhow::Error` and never mapped onto this enum.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// A positive or negative lexicon term can never match a normalized token.
    #[error("invalid lexicon term {term:?}: terms must be non-empty and contain only a-z")]
    InvalidTerm { term: String },

    /// The polarity engine reported a NaN or infinite score.
    #[error(
        "polarity engine returned a non-finite score \
         (polarity {polarity}, subjectivity {subjectivity})"
    )]
    InvalidScore { polarity: f64, subjectivity: f64 },

    /// A lexicon configuration could not be read or decoded.
    #[error("lexicon configuration: {0}")]
    Config(String),
}
