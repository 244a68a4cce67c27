use super::model::PolarityEngine;
use super::pipeline::SentimentAnalysisPipeline;
use crate::core::LexiconConfig;
use crate::models::{Lexicon, PatternPolarityEngine, StopwordSet};
use crate::pipelines::utils::Normalizer;
use tracing::{debug, warn};

/// Builder for configuring and constructing a [`SentimentAnalysisPipeline`].
///
/// Start with `new(engine)` (or `pattern()` for the bundled rule-based
/// engine), then chain optional settings:
/// - `.config(LexiconConfig)`: replace all word lists at once.
/// - `.positive_terms(..)` / `.negative_terms(..)`: replace one lexicon side.
/// - `.stopwords(..)` / `.without_stopwords()`: change what normalization drops.
/// - `.engine(..)`: swap the polarity engine.
///
/// Unset lists default to the built-in English word lists.
#[derive(Debug, Clone)]
pub struct SentimentAnalysisPipelineBuilder<E: PolarityEngine> {
    engine: E,
    config: LexiconConfig,
}

impl<E: PolarityEngine> SentimentAnalysisPipelineBuilder<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            config: LexiconConfig::default(),
        }
    }

    pub fn config(mut self, config: LexiconConfig) -> Self {
        self.config = config;
        self
    }

    pub fn positive_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.positive_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn negative_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.negative_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    /// Keeps every token during normalization.
    pub fn without_stopwords(mut self) -> Self {
        self.config.stopwords.clear();
        self
    }

    pub fn engine<F: PolarityEngine>(self, engine: F) -> SentimentAnalysisPipelineBuilder<F> {
        SentimentAnalysisPipelineBuilder {
            engine,
            config: self.config,
        }
    }

    /// Validates the word lists and constructs the pipeline.
    pub fn build(self) -> anyhow::Result<SentimentAnalysisPipeline<E>> {
        let lexicon = Lexicon::new(&self.config.positive_terms, &self.config.negative_terms)?;

        let overlap = lexicon.overlap();
        if !overlap.is_empty() {
            warn!(
                terms = ?overlap,
                "terms appear in both lexicons and will count toward both tallies"
            );
        }

        let normalizer = Normalizer::new(StopwordSet::from_words(&self.config.stopwords));
        debug!(
            positive_terms = lexicon.positive_len(),
            negative_terms = lexicon.negative_len(),
            stopwords = normalizer.stopwords().len(),
            "built sentiment pipeline"
        );

        Ok(SentimentAnalysisPipeline {
            normalizer,
            lexicon,
            engine: self.engine,
        })
    }
}

impl SentimentAnalysisPipelineBuilder<PatternPolarityEngine> {
    /// Uses the bundled rule-based [`PatternPolarityEngine`].
    pub fn pattern() -> Self {
        Self::new(PatternPolarityEngine::new())
    }
}
