//! Batch reporting on top of the sentiment pipeline.
//!
//! Nothing here feeds back into scoring: reports and charts only consume
//! the plain results the pipeline returns.

pub mod chart;
pub mod table;

pub use chart::{
    polarity_histogram, HistogramBin, SentimentChart, DEFAULT_CHART_PATH, HISTOGRAM_BINS,
};
pub use table::{BatchReport, ScoringMethod};

pub use crate::pipelines::{truncate_review, ReviewRow};

use crate::pipelines::{PolarityEngine, SentimentAnalysisPipeline};
use std::path::Path;
use tracing::info;

impl<E: PolarityEngine> SentimentAnalysisPipeline<E> {
    /// Scores a batch with both methods and tabulates the results.
    pub fn analyze_reviews<S: AsRef<str>>(&self, reviews: &[S]) -> anyhow::Result<BatchReport> {
        let report = BatchReport::new(self.score_batch(reviews)?);
        info!(
            reviews = report.len(),
            simple = ?report.label_counts(ScoringMethod::Simple),
            advanced = ?report.label_counts(ScoringMethod::Advanced),
            "sentiment analysis complete"
        );
        Ok(report)
    }

    /// Scores a batch with the polarity method only and saves the chart to `path`.
    pub fn visualize<S: AsRef<str>>(
        &self,
        reviews: &[S],
        path: impl AsRef<Path>,
    ) -> anyhow::Result<SentimentChart> {
        let scores = reviews
            .iter()
            .map(|review| {
                self.score_advanced(review.as_ref())
                    .map(|result| (result.label, result.polarity))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let chart = SentimentChart::from_scores(scores);
        chart.render(path)?;
        Ok(chart)
    }
}
