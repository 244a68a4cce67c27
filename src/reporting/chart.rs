//! Two-panel sentiment chart: label frequencies next to a polarity histogram.

use crate::core::SentimentLabel;
use anyhow::Context;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing::info;

pub const DEFAULT_CHART_PATH: &str = "sentiment_visualization.svg";

pub const HISTOGRAM_BINS: usize = 20;

const CHART_SIZE: (u32, u32) = (1200, 500);
const POLARITY_AXIS_LABEL: &str = "Polarity (-1 = Negative, +1 = Positive)";

const POSITIVE_COLOR: RGBColor = RGBColor(0, 128, 0);
const NEUTRAL_COLOR: RGBColor = RGBColor(128, 128, 128);
const NEGATIVE_COLOR: RGBColor = RGBColor(255, 0, 0);
const HISTOGRAM_COLOR: RGBColor = RGBColor(31, 119, 180);

type ChartArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;

pub fn label_color(label: SentimentLabel) -> RGBColor {
    match label {
        SentimentLabel::Positive => POSITIVE_COLOR,
        SentimentLabel::Neutral => NEUTRAL_COLOR,
        SentimentLabel::Negative => NEGATIVE_COLOR,
    }
}

/// One histogram bar covering `[start, end)`; the last bin also includes `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Splits the range of `values` into `bins` equal-width bins and counts the
/// values falling into each one.
///
/// The range runs from the smallest to the largest finite value. When every
/// value is the same the range is widened by 0.5 on each side, and with no
/// values at all it is `[0, 1]`. Non-finite values are ignored.
pub fn polarity_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if bins == 0 {
        return Vec::new();
    }

    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let lo = finite.iter().copied().reduce(f64::min);
    let hi = finite.iter().copied().reduce(f64::max);
    let (lo, hi) = match (lo, hi) {
        (Some(lo), Some(hi)) if lo == hi => (lo - 0.5, hi + 0.5),
        (Some(lo), Some(hi)) => (lo, hi),
        _ => (0.0, 1.0),
    };

    // Halved bounds keep the span finite even for values near f64::MAX.
    let half_span = hi / 2.0 - lo / 2.0;
    let edge = |i: usize| {
        let t = i as f64 / bins as f64;
        lo * (1.0 - t) + hi * t
    };

    let mut counts = vec![0usize; bins];
    for value in finite {
        let fraction = (value / 2.0 - lo / 2.0) / half_span;
        let index = ((fraction * bins as f64) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: edge(i),
            end: if i + 1 == bins { hi } else { edge(i + 1) },
            count,
        })
        .collect()
}

/// Data behind the sentiment chart, computed once and drawn on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentChart {
    /// Every label in display order, including those with a zero count.
    pub label_counts: Vec<(SentimentLabel, usize)>,
    pub histogram: Vec<HistogramBin>,
}

impl SentimentChart {
    /// Builds the chart from `(label, polarity)` pairs of the advanced method.
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (SentimentLabel, f64)>,
    {
        let mut label_counts: Vec<(SentimentLabel, usize)> =
            SentimentLabel::ALL.iter().map(|&label| (label, 0)).collect();
        let mut polarities = Vec::new();

        for (label, polarity) in scores {
            if let Some((_, count)) = label_counts.iter_mut().find(|(l, _)| *l == label) {
                *count += 1;
            }
            polarities.push(polarity);
        }

        Self {
            label_counts,
            histogram: polarity_histogram(&polarities, HISTOGRAM_BINS),
        }
    }

    /// Total number of scored reviews.
    pub fn total(&self) -> usize {
        self.label_counts.iter().map(|(_, count)| count).sum()
    }

    /// Writes the chart to `path` as an SVG image.
    pub fn render(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let (left, right) = root.split_horizontally(CHART_SIZE.0 / 2);
        self.draw_distribution(&left)
            .context("failed to draw sentiment distribution")?;
        self.draw_histogram(&right)
            .context("failed to draw polarity histogram")?;

        root.present()
            .with_context(|| format!("failed to write chart to {}", path.display()))?;
        info!(path = %path.display(), reviews = self.total(), "saved sentiment chart");
        Ok(())
    }

    fn draw_distribution(&self, area: &ChartArea<'_>) -> anyhow::Result<()> {
        let max_count = self
            .label_counts
            .iter()
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0);
        let labels: Vec<SentimentLabel> =
            self.label_counts.iter().map(|(label, _)| *label).collect();

        let mut chart = ChartBuilder::on(area)
            .caption("Sentiment Distribution", ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(
                (0..labels.len()).into_segmented(),
                0..max_count + max_count / 10 + 1,
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Number of Reviews")
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(i) => {
                    labels.get(*i).map(ToString::to_string).unwrap_or_default()
                }
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(self.label_counts.iter().enumerate().map(|(i, (label, count))| {
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), *count)],
                label_color(*label).filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))?;

        Ok(())
    }

    fn draw_histogram(&self, area: &ChartArea<'_>) -> anyhow::Result<()> {
        let (first, last) = match (self.histogram.first(), self.histogram.last()) {
            (Some(first), Some(last)) => (first.start, last.end),
            _ => (0.0, 1.0),
        };
        // Keep the zero marker on screen even when every polarity has one sign.
        let x_range = first.min(0.0)..last.max(0.0);
        let max_count = self.histogram.iter().map(|bin| bin.count).max().unwrap_or(0);
        let y_top = (max_count as f64 * 1.1).max(1.0);

        let mut chart = ChartBuilder::on(area)
            .caption("Polarity Score Distribution", ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_range, 0f64..y_top)?;

        chart
            .configure_mesh()
            .x_desc(POLARITY_AXIS_LABEL)
            .y_desc("Count")
            .y_label_formatter(&|y| format!("{y:.0}"))
            .draw()?;

        chart.draw_series(self.histogram.iter().map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                HISTOGRAM_COLOR.filled(),
            )
        }))?;
        chart.draw_series(self.histogram.iter().filter(|bin| bin.count > 0).map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                BLACK.stroke_width(1),
            )
        }))?;

        chart.draw_series(DashedLineSeries::new(
            vec![(0.0, 0.0), (0.0, y_top)],
            8,
            6,
            RED.mix(0.5).stroke_width(2),
        ))?;

        Ok(())
    }
}
