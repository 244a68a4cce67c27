use serde::Serialize;

/// Raw output of a polarity engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScore {
    /// `-1.0` (negative) to `1.0` (positive).
    pub polarity: f64,
    /// `0.0` (objective) to `1.0` (subjective).
    pub subjectivity: f64,
}

impl PolarityScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }
}

/// Trait for anything that can assign a polarity and subjectivity to text.
///
/// The pipeline treats engines as black boxes: it never inspects how a score
/// was produced and does not catch engine errors. Plain closures work too,
/// which keeps mocks in tests short:
///
/// ```
/// use sentiment_analyzer::pipelines::{PolarityEngine, PolarityScore};
///
/// fn always_positive() -> impl Fn(&str) -> anyhow::Result<PolarityScore> {
///     |_: &str| Ok(PolarityScore::new(0.8, 0.5))
/// }
///
/// let score = always_positive().analyze("anything")?;
/// assert_eq!(score.polarity, 0.8);
/// # anyhow::Ok(())
/// ```
pub trait PolarityEngine {
    fn analyze(&self, text: &str) -> anyhow::Result<PolarityScore>;
}

impl<F> PolarityEngine for F
where
    F: Fn(&str) -> anyhow::Result<PolarityScore>,
{
    fn analyze(&self, text: &str) -> anyhow::Result<PolarityScore> {
        self(text)
    }
}
