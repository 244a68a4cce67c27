use crate::core::SentimentLabel;
use crate::pipelines::ReviewRow;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMethod {
    Simple,
    Advanced,
}

impl ScoringMethod {
    fn label_of(self, row: &ReviewRow) -> SentimentLabel {
        match self {
            ScoringMethod::Simple => row.simple_label,
            ScoringMethod::Advanced => row.advanced_label,
        }
    }
}

/// Tabulated results of scoring a batch of reviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BatchReport {
    rows: Vec<ReviewRow>,
}

impl BatchReport {
    pub fn new(rows: Vec<ReviewRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ReviewRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// How often each label was assigned by `method`.
    ///
    /// Most frequent first; ties keep the order in which the labels first
    /// appear. Labels that were never assigned are left out.
    pub fn label_counts(&self, method: ScoringMethod) -> Vec<(SentimentLabel, usize)> {
        let mut counts: Vec<(SentimentLabel, usize)> = Vec::new();
        for row in &self.rows {
            let label = method.label_of(row);
            match counts.iter_mut().find(|(seen, _)| *seen == label) {
                Some((_, count)) => *count += 1,
                None => counts.push((label, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    pub fn polarities(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.polarity).collect()
    }

    /// The rows as a pretty-printed JSON array.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SENTIMENT ANALYSIS RESULTS")?;
        writeln!(f, "{}", "=".repeat(50))?;

        for (title, method) in [
            ("Simple Method Results:", ScoringMethod::Simple),
            ("Advanced Method Results:", ScoringMethod::Advanced),
        ] {
            writeln!(f)?;
            writeln!(f, "{title}")?;
            for (label, count) in self.label_counts(method) {
                writeln!(f, "{:<10}{count:>5}", label.as_str())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SentimentLabel::*;

    fn row(simple: SentimentLabel, advanced: SentimentLabel, polarity: f64) -> ReviewRow {
        ReviewRow {
            review: "review".to_string(),
            simple_label: simple,
            advanced_label: advanced,
            polarity,
        }
    }

    #[test]
    fn label_counts_sort_by_frequency_then_first_seen() {
        let report = BatchReport::new(vec![
            row(Neutral, Positive, 0.5),
            row(Positive, Negative, -0.5),
            row(Positive, Positive, 0.4),
            row(Neutral, Negative, -0.3),
            row(Negative, Neutral, 0.0),
        ]);
        assert_eq!(
            report.label_counts(ScoringMethod::Simple),
            vec![(Neutral, 2), (Positive, 2), (Negative, 1)]
        );
        assert_eq!(
            report.label_counts(ScoringMethod::Advanced),
            vec![(Positive, 2), (Negative, 2), (Neutral, 1)]
        );
    }

    #[test]
    fn unseen_labels_are_omitted() {
        let report = BatchReport::new(vec![row(Positive, Positive, 0.9)]);
        assert_eq!(report.label_counts(ScoringMethod::Simple), vec![(Positive, 1)]);
        assert!(BatchReport::default().label_counts(ScoringMethod::Advanced).is_empty());
    }

    #[test]
    fn summary_lists_both_methods() {
        let report =
            BatchReport::new(vec![row(Positive, Negative, -0.4), row(Positive, Neutral, 0.0)]);
        let summary = report.to_string();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "SENTIMENT ANALYSIS RESULTS");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[3], "Simple Method Results:");
        assert_eq!(lines[4], "Positive      2");
        assert_eq!(lines[6], "Advanced Method Results:");
        assert_eq!(lines[7], "Negative      1");
        assert_eq!(lines[8], "Neutral       1");
    }

    #[test]
    fn json_is_an_array_of_rows() -> anyhow::Result<()> {
        let report = BatchReport::new(vec![row(Negative, Negative, -0.75)]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()?)?;
        assert_eq!(value[0]["simple_label"], "Negative");
        assert_eq!(value[0]["advanced_label"], "Negative");
        assert_eq!(value[0]["polarity"], -0.75);
        assert_eq!(value[0]["review"], "review");
        Ok(())
    }
}
