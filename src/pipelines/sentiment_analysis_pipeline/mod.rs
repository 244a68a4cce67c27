//! Sentiment analysis pipeline for classifying short reviews.
//!
//! Every review can be scored two independent ways:
//!
//! - **simple**: count positive and negative lexicon words in the normalized
//!   text and let the larger side win.
//! - **advanced**: ask a [`PolarityEngine`] for a polarity in `[-1, 1]` and
//!   map it onto a label with a small neutral band around zero.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - Scoring entry points
//! - [`SentimentAnalysisPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`PolarityEngine`] - Trait for polarity engine implementations
//!
//! ## Usage Example
//!
//! ```rust
//! use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::*;
//!
//! let pipeline = SentimentAnalysisPipelineBuilder::pattern().build()?;
//!
//! let simple = pipeline.score_simple("This is good great excellent");
//! assert_eq!(simple.label, SentimentLabel::Positive);
//! assert_eq!(simple.confidence, 75.0);
//!
//! let advanced = pipeline.score_advanced("This is good great excellent")?;
//! println!("Sentiment: {} (polarity: {:.2})", advanced.label, advanced.polarity);
//! # anyhow::Ok(())
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use model::{PolarityEngine, PolarityScore};
pub use pipeline::{
    truncate_review, AdvancedSentimentResult, ReviewRow, SentimentAnalysisPipeline,
    SimpleSentimentResult, REVIEW_DISPLAY_CHARS, TRUNCATION_MARKER,
};

pub use crate::core::SentimentLabel;
pub use crate::models::PatternPolarityEngine;

pub use anyhow::Result;
